//! Router assembly and shared state.

use super::{cors, handlers};
use crate::usecases::NameAnalysisService;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Router, middleware};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NameAnalysisService>,
}

impl AppState {
    pub fn new(service: Arc<NameAnalysisService>) -> Self {
        Self { service }
    }
}

/// Build the application router.
///
/// `max_upload_bytes` bounds every request body, CSV uploads included.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/analyze-name", post(handlers::analyze_name))
        .route("/analyze-csv", post(handlers::analyze_csv))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(cors::allow_all))
        .with_state(state)
}
