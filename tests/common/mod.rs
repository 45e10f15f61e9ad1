//! Shared test utilities for peerwatch integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use peerwatch::api::{create_router, AppState};
use peerwatch::config::{PeerConfig, PeerwatchConfig, PollerConfig};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::Service;

/// Create a project directory containing empty files at the given relative paths.
pub fn make_project(files: &[&str]) -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    for file in files {
        let path = temp.path().join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "").unwrap();
    }
    temp
}

/// Config rooted at `root`, named `name`, polling `peers` with a short timeout.
pub fn make_config(root: &Path, name: &str, peers: Vec<PeerConfig>) -> PeerwatchConfig {
    let mut config = PeerwatchConfig::default();
    config.project.name = Some(name.to_string());
    config.project.root = root.to_path_buf();
    config.peers = peers;
    config.poller = PollerConfig {
        timeout_seconds: 1,
        max_concurrent: 4,
    };
    config
}

pub fn make_app(config: PeerwatchConfig) -> axum::Router {
    let state = Arc::new(AppState::new(Arc::new(config)).unwrap());
    create_router(state)
}

/// Issue a GET against the router.
pub async fn get(app: &mut axum::Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.call(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// GET `uri` and parse the JSON body, returning the status alongside.
pub async fn get_json(app: &mut axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = get(app, uri).await;
    let status = response.status();
    let body = body_string(response).await;
    (status, serde_json::from_str(&body).unwrap())
}
