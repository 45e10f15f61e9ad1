//! # HTTP API
//!
//! ## Endpoints
//!
//! - `GET /api/health` - This node's health report
//! - `GET /api/project-info` - Project category, file-type counts, manifest maps
//! - `GET /api/network-status` - Health of every configured peer
//! - `GET /` - Dashboard page
//! - `GET /_peerwatch/assets/*path` - Embedded dashboard assets
//! - `GET /_peerwatch/metrics` - Prometheus metrics
//!
//! Any other path is served as a static file from the project root. peerwatch's
//! own extras live under `/_peerwatch` so project directories such as `assets/`
//! stay reachable.
//!
//! ## Example
//!
//! ```no_run
//! use peerwatch::api::{create_router, AppState};
//! use peerwatch::config::PeerwatchConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(PeerwatchConfig::default());
//! let state = Arc::new(AppState::new(config)?);
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Handler failures are returned as HTTP 500 with a JSON body:
//! ```json
//! { "error": "failed to parse manifest ./package.json: expected value at line 1 column 1" }
//! ```

mod error;
mod health;
mod network_status;
mod project_info;

pub use error::ApiError;

use crate::config::PeerwatchConfig;
use crate::inspect::{InspectError, SelfInspector};
use crate::peers::PeerPoller;
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub config: Arc<PeerwatchConfig>,
    pub inspector: Arc<SelfInspector>,
    pub poller: Arc<PeerPoller>,
    /// Renders the Prometheus exposition text
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Build state from configuration. Fails only if the HTTP client cannot be built.
    pub fn new(config: Arc<PeerwatchConfig>) -> Result<Self, reqwest::Error> {
        let poller = PeerPoller::new(config.peers.clone(), config.poller.clone())?;
        Ok(Self::with_poller(config, poller))
    }

    /// Build state around an existing poller (for testing).
    pub fn with_poller(config: Arc<PeerwatchConfig>, poller: PeerPoller) -> Self {
        let inspector = Arc::new(SelfInspector::new(config.project.clone()));

        // A global recorder may already be installed (tests, repeated construction)
        let metrics_handle = crate::metrics::setup_metrics().unwrap_or_else(|e| {
            tracing::debug!("Metrics already initialized, creating new handle: {}", e);
            metrics_exporter_prometheus::PrometheusBuilder::new()
                .build_recorder()
                .handle()
        });

        Self {
            config,
            inspector,
            poller: Arc::new(poller),
            metrics_handle,
        }
    }
}

/// Run a blocking inspection on the blocking pool.
async fn run_inspection<T, F>(state: &AppState, f: F) -> Result<T, InspectError>
where
    T: Send + 'static,
    F: FnOnce(&SelfInspector) -> Result<T, InspectError> + Send + 'static,
{
    let inspector = Arc::clone(&state.inspector);
    tokio::task::spawn_blocking(move || f(&inspector))
        .await
        .map_err(|e| InspectError::Task(e.to_string()))?
}

/// Create the main router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.project.root);

    Router::new()
        .route("/", get(crate::dashboard::dashboard_handler))
        .route(
            "/_peerwatch/assets/*path",
            get(crate::dashboard::assets_handler),
        )
        .route("/api/health", get(health::handle))
        .route("/api/project-info", get(project_info::handle))
        .route("/api/network-status", get(network_status::handle))
        .route("/_peerwatch/metrics", get(crate::metrics::metrics_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http().make_span_with(crate::logging::make_request_span))
        .with_state(state)
}
