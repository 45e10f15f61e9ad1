//! Project introspection endpoint handler.

use super::{run_inspection, ApiError, AppState};
use crate::inspect::ProjectInfo;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /api/project-info - Category, file-type counts and manifest maps.
pub async fn handle(State(state): State<Arc<AppState>>) -> Result<Json<ProjectInfo>, ApiError> {
    run_inspection(&state, |inspector| inspector.project_info())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "Project inspection failed");
            ApiError::from(e)
        })
}
