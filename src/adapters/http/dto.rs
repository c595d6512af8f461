//! Request and response bodies specific to the HTTP surface.
//!
//! `NameAnalysis` and `CsvReport` from the domain are serialized directly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalyzeNameRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub ok: bool,
    pub service: &'static str,
    pub mock_mode: bool,
}
