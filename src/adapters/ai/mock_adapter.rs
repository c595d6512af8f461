//! Mock name classifier for running without a model.
//!
//! Deterministic: a small diminutive table plus an ending heuristic. Never fails.

use crate::domain::{DomainError, NameAnalysis};
use crate::ports::NameClassifierPort;
use tracing::debug;

const MALE: &str = "мужской";
const FEMALE: &str = "женский";

/// Diminutive → canonical name, male.
const MALE_NAMES: &[(&str, &str)] = &[
    ("саша", "Александр"),
    ("женя", "Евгений"),
    ("женек", "Евгений"),
    ("сашка", "Александр"),
    ("алекс", "Александр"),
];

/// Diminutive → canonical name, female.
const FEMALE_NAMES: &[(&str, &str)] = &[
    ("маша", "Мария"),
    ("мария", "Мария"),
    ("маришка", "Мария"),
    ("аня", "Анна"),
];

/// Endings that mark an unmapped name as female.
const FEMALE_ENDINGS: &[char] = &['а', 'я'];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Classify a name with the local rules. `corrected_input` is the trimmed input, case kept.
pub fn mock_classify(name: &str) -> NameAnalysis {
    let input = name.trim();
    let low = input.to_lowercase();

    if let Some(full) = lookup(MALE_NAMES, &low) {
        return NameAnalysis::new(MALE, full, input);
    }
    if let Some(full) = lookup(FEMALE_NAMES, &low) {
        return NameAnalysis::new(FEMALE, full, input);
    }
    let gender = if low.ends_with(FEMALE_ENDINGS) { FEMALE } else { MALE };
    NameAnalysis::new(gender, &capitalize(input), input)
}

/// Mock classifier adapter. Wraps [`mock_classify`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MockClassifierAdapter;

impl MockClassifierAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl NameClassifierPort for MockClassifierAdapter {
    async fn classify(&self, name: &str) -> Result<NameAnalysis, DomainError> {
        let analysis = mock_classify(name);
        debug!(
            name_len = name.chars().count(),
            gender = ?analysis.gender,
            "[MOCK] classified name"
        );
        Ok(analysis)
    }

    fn mode(&self) -> &'static str {
        "mock"
    }
}
