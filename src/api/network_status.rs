//! Peer network status endpoint handler.

use super::AppState;
use crate::peers::NetworkStatusReport;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /api/network-status - Poll every configured peer.
///
/// Always 200: unreachable peers appear as offline entries.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<NetworkStatusReport> {
    Json(state.poller.poll_all().await)
}
