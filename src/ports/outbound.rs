//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, NameAnalysis};

/// Name classifier. Live model or deterministic local rules.
#[async_trait::async_trait]
pub trait NameClassifierPort: Send + Sync {
    /// Classify one name into gender, canonical full name and cleaned spelling.
    ///
    /// Missing fields in the classifier's answer come back as `None`, never as an error.
    async fn classify(&self, name: &str) -> Result<NameAnalysis, DomainError>;

    /// Short label for logs and the health endpoint.
    fn mode(&self) -> &'static str;
}
