//! Route handlers. Thin: extract, delegate to the service, serialize.

use super::dto::{AnalyzeNameRequest, Health};
use super::error::ApiError;
use super::router::AppState;
use crate::domain::{CsvReport, NameAnalysis, ValidationError};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use tracing::info;

pub async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        ok: true,
        service: env!("CARGO_PKG_NAME"),
        mock_mode: state.service.is_mock(),
    })
}

pub async fn analyze_name(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeNameRequest>, JsonRejection>,
) -> Result<Json<NameAnalysis>, ApiError> {
    let Json(req) = payload?;
    info!(name_len = req.name.chars().count(), "analyze-name");
    let analysis = state.service.analyze_name(&req.name).await?;
    Ok(Json(analysis))
}

/// Takes the first multipart part that carries a filename; the field name does not matter.
pub async fn analyze_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CsvReport>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let bytes = field.bytes().await?;
        info!(filename = %filename, size = bytes.len(), "analyze-csv");
        let report = state.service.analyze_csv(&filename, &bytes).await?;
        return Ok(Json(report));
    }
    Err(ValidationError::MissingFile.into())
}
