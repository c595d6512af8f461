//! Core domain layer. No external I/O dependencies.
//!
//! Entities, validation rules and errors live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{CsvReport, MAX_NAME_CHARS, NameAnalysis, NameQuery};
pub use errors::{DomainError, UpstreamError, ValidationError};
