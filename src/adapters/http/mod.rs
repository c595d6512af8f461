//! HTTP adapter. axum router, handlers, CORS, and error mapping.
//!
//! Inbound side of the hexagon: requests are translated into NameAnalysisService calls.

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiError;
pub use router::{AppState, router};
