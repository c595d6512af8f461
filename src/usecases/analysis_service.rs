//! Analysis service. Orchestrates single-name and batch (CSV) classification.
//!
//! Coordinates between validation (domain), the classifier port, and the CSV codec.

use crate::adapters::files::{CsvTable, RESULT_COLUMNS, decode_upload, write_csv};
use crate::domain::{CsvReport, DomainError, NameAnalysis, NameQuery, ValidationError};
use crate::ports::NameClassifierPort;
use std::sync::Arc;
use tracing::{info, warn};

/// Service for name classification.
///
/// Holds no per-request state; one instance is shared by all requests.
pub struct NameAnalysisService {
    classifier: Arc<dyn NameClassifierPort>,
}

impl NameAnalysisService {
    /// Create a new analysis service.
    ///
    /// # Arguments
    /// * `classifier` - Classifier implementation (Ollama, Mock, etc.)
    pub fn new(classifier: Arc<dyn NameClassifierPort>) -> Self {
        Self { classifier }
    }

    /// Label of the active classifier ("ollama", "mock").
    pub fn mode(&self) -> &'static str {
        self.classifier.mode()
    }

    /// True when the rule-based mock classifier is active.
    pub fn is_mock(&self) -> bool {
        self.mode() == "mock"
    }

    /// Validate one name and classify it.
    ///
    /// Validation runs before any classifier call.
    pub async fn analyze_name(&self, raw: &str) -> Result<NameAnalysis, DomainError> {
        let query = NameQuery::parse(raw)?;
        self.classifier.classify(query.as_str()).await
    }

    /// Classify every row of an uploaded CSV file.
    ///
    /// Rows are processed one after another. A row whose name is missing, or whose
    /// classification fails, gets blank result columns; the batch itself never fails on a
    /// row and failed rows are not counted.
    pub async fn analyze_csv(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<CsvReport, DomainError> {
        if !filename.ends_with(".csv") {
            return Err(ValidationError::NotCsvFile.into());
        }

        let text = decode_upload(bytes);
        let table = CsvTable::parse(&text)?;

        let mut headers = table.headers.clone();
        headers.extend(RESULT_COLUMNS.iter().map(|c| c.to_string()));

        info!(
            filename,
            rows = table.rows.len(),
            columns = table.headers.len(),
            "analyzing CSV upload"
        );

        let mut rows = Vec::with_capacity(table.rows.len());
        for (index, row) in table.rows.iter().enumerate() {
            let cells = match table.name_of(row) {
                None => Default::default(),
                Some(name) => match self.classifier.classify(name).await {
                    Ok(analysis) => analysis.to_cells(),
                    Err(e) => {
                        warn!(row = index + 1, error = %e, "row classification failed, leaving blank");
                        Default::default()
                    }
                },
            };
            let mut out = row.clone();
            out.extend(cells);
            rows.push(out);
        }

        let content = write_csv(&headers, &rows)
            .map_err(|e| DomainError::Internal(format!("failed to write CSV: {}", e)))?;

        Ok(CsvReport {
            filename: filename.to_string(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockClassifierAdapter;
    use crate::domain::UpstreamError;
    use std::sync::Mutex;

    /// Classifier that records calls and fails for names listed in `failing`.
    #[derive(Default)]
    struct RecordingClassifier {
        calls: Mutex<Vec<String>>,
        failing: Vec<&'static str>,
    }

    #[async_trait::async_trait]
    impl NameClassifierPort for RecordingClassifier {
        async fn classify(&self, name: &str) -> Result<NameAnalysis, DomainError> {
            self.calls.lock().unwrap().push(name.to_string());
            if self.failing.iter().any(|f| *f == name) {
                return Err(UpstreamError::Status {
                    status: 500,
                    body: "boom".into(),
                }
                .into());
            }
            Ok(NameAnalysis {
                gender: Some("мужской".into()),
                full_name: None,
                corrected_input: Some(name.to_string()),
            })
        }

        fn mode(&self) -> &'static str {
            "recording"
        }
    }

    fn mock_service() -> NameAnalysisService {
        NameAnalysisService::new(Arc::new(MockClassifierAdapter::new()))
    }

    #[tokio::test]
    async fn test_validation_before_classifier() {
        let classifier = Arc::new(RecordingClassifier::default());
        let service = NameAnalysisService::new(classifier.clone());

        let long = "a".repeat(101);
        for (raw, expected) in [
            ("  ", ValidationError::EmptyName),
            (long.as_str(), ValidationError::NameTooLong),
            ("Sasha7", ValidationError::NameContainsDigits),
        ] {
            let err = service.analyze_name(raw).await.unwrap_err();
            assert_eq!(err, DomainError::Validation(expected));
        }
        assert!(classifier.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_is_mock() {
        assert!(mock_service().is_mock());
        let service = NameAnalysisService::new(Arc::new(RecordingClassifier::default()));
        assert!(!service.is_mock());
    }

    #[tokio::test]
    async fn test_analyze_name_passes_trimmed() {
        let classifier = Arc::new(RecordingClassifier::default());
        let service = NameAnalysisService::new(classifier.clone());

        service.analyze_name("  Саша ").await.unwrap();
        assert_eq!(*classifier.calls.lock().unwrap(), vec!["Саша".to_string()]);
    }

    #[tokio::test]
    async fn test_csv_mock_round_trip() {
        let service = mock_service();
        let input = "name,age\nСаша,30\nСветлана,25\n,40\n";

        let report = service.analyze_csv("people.csv", input.as_bytes()).await.unwrap();
        assert_eq!(report.filename, "people.csv");

        let lines: Vec<&str> = report.content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "name,age,gender,full_name,corrected_input");
        assert_eq!(lines[1], "Саша,30,мужской,Александр,Саша");
        assert_eq!(lines[2], "Светлана,25,женский,Светлана,Светлана");
        assert_eq!(lines[3], ",40,,,");
    }

    #[tokio::test]
    async fn test_csv_row_failure_is_absorbed() {
        let classifier = Arc::new(RecordingClassifier {
            failing: vec!["Петр"],
            ..Default::default()
        });
        let service = NameAnalysisService::new(classifier.clone());
        let input = "Name\nПетр\nИван\n";

        let report = service.analyze_csv("x.csv", input.as_bytes()).await.unwrap();
        let lines: Vec<&str> = report.content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name,gender,full_name,corrected_input",
                "Петр,,,",
                "Иван,мужской,,Иван"
            ]
        );
        assert_eq!(
            *classifier.calls.lock().unwrap(),
            vec!["Петр".to_string(), "Иван".to_string()]
        );
    }

    #[tokio::test]
    async fn test_csv_rejects_other_extensions() {
        let service = mock_service();
        for filename in ["names.txt", "names.CSV", "names.csv.bak"] {
            let err = service.analyze_csv(filename, b"name\n").await.unwrap_err();
            assert_eq!(err, DomainError::Validation(ValidationError::NotCsvFile));
        }
    }

    #[tokio::test]
    async fn test_csv_latin1_upload() {
        let service = mock_service();
        let mut input = b"name\nJos".to_vec();
        input.push(0xE9);
        input.push(b'\n');

        let report = service.analyze_csv("latin.csv", &input).await.unwrap();
        let lines: Vec<&str> = report.content.lines().collect();
        assert_eq!(lines[1], "José,мужской,José,José");
    }

    #[tokio::test]
    async fn test_csv_empty_upload() {
        let service = mock_service();
        let report = service.analyze_csv("empty.csv", b"").await.unwrap();
        assert_eq!(report.content, "gender,full_name,corrected_input\r\n");
    }
}
