//! Self health endpoint handler.

use super::{run_inspection, ApiError, AppState};
use crate::inspect::HealthReport;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /api/health - Report this node's own health.
pub async fn handle(State(state): State<Arc<AppState>>) -> Result<Json<HealthReport>, ApiError> {
    run_inspection(&state, |inspector| inspector.health())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "Self health check failed");
            ApiError::health_failure(e.to_string())
        })
}
