//! Infrastructure adapters. Implement ports and the HTTP surface.
//!
//! Ollama/mock classifiers, CSV codec, axum router, startup banner. Map errors to DomainError.

pub mod ai;
pub mod files;
pub mod http;
pub mod ui;
