//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these; the HTTP adapter maps them to status codes.

use thiserror::Error;

/// Client-caused failures. Display text is the reason reported to the caller verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty name")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Name contains digits")]
    NameContainsDigits,

    #[error("Only CSV files are allowed")]
    NotCsvFile,

    #[error("No file uploaded")]
    MissingFile,

    #[error("Invalid CSV: {0}")]
    InvalidCsv(String),
}

/// Failures of the upstream model service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Connection error, timeout, or body read failure.
    #[error("LLM request failed: {0}")]
    Transport(String),

    #[error("LLM returned {status}: {body}")]
    Status { status: u16, body: String },

    /// A `{...}` substring was found but is not valid JSON.
    #[error("LLM returned invalid JSON")]
    InvalidJson,

    /// Neither the body nor any substring of it is JSON.
    #[error("LLM returned invalid response")]
    InvalidResponse,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Server-side failure unrelated to the request or the model.
    #[error("Internal error: {0}")]
    Internal(String),
}
