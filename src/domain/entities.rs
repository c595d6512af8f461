//! Domain entities. Request-scoped data, never persisted.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

/// Maximum accepted name length, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// A validated given name: trimmed, non-empty, at most [`MAX_NAME_CHARS`], no digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery(String);

impl NameQuery {
    /// Validate a raw name. The trimmed string is kept as-is (no case or diacritic folding).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ValidationError::NameTooLong);
        }
        if name.chars().any(is_decimal_digit) {
            return Err(ValidationError::NameContainsDigits);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Decimal digit in any script (general category Nd). Roman numerals and fractions are not digits.
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Classification result. Every key is always serialized; absent values become `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAnalysis {
    pub gender: Option<String>,
    pub full_name: Option<String>,
    pub corrected_input: Option<String>,
}

impl NameAnalysis {
    pub fn new(gender: &str, full_name: &str, corrected_input: &str) -> Self {
        Self {
            gender: Some(gender.to_string()),
            full_name: Some(full_name.to_string()),
            corrected_input: Some(corrected_input.to_string()),
        }
    }

    /// True when the upstream supplied none of the three fields.
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.full_name.is_none() && self.corrected_input.is_none()
    }

    /// The three result cells for a CSV row, absent values as empty strings.
    pub fn to_cells(&self) -> [String; 3] {
        [
            self.gender.clone().unwrap_or_default(),
            self.full_name.clone().unwrap_or_default(),
            self.corrected_input.clone().unwrap_or_default(),
        ]
    }
}

/// Re-serialized batch upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvReport {
    pub filename: String,
    pub content: String,
}
