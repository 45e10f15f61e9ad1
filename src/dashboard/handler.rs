//! HTTP handlers for dashboard routes

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use rust_embed::RustEmbed;
use std::sync::Arc;

use crate::api::{ApiError, AppState};

/// Placeholder in `index.html` replaced by the escaped project name.
const PROJECT_NAME_SLOT: &str = "{{PROJECT_NAME}}";

/// Embedded dashboard assets from dashboard/ directory
#[derive(RustEmbed)]
#[folder = "dashboard/"]
struct DashboardAssets;

/// Render the dashboard page for a project name.
pub fn render_index(project_name: &str) -> Option<String> {
    let content = DashboardAssets::get("index.html")?;
    let html = std::str::from_utf8(&content.data).ok()?;
    Some(html.replace(PROJECT_NAME_SLOT, &escape_html(project_name)))
}

/// Serves the main dashboard HTML page
pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Response {
    match render_index(state.inspector.project_name()) {
        Some(html) => Html(html).into_response(),
        None => ApiError::internal("Dashboard HTML not found").into_response(),
    }
}

/// Serves static assets (CSS, JS)
pub async fn assets_handler(Path(path): Path<String>) -> Response {
    match DashboardAssets::get(&path) {
        Some(content) => {
            let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime_type.as_ref())], content.data).into_response()
        }
        None => ApiError::not_found(format!("Asset not found: {}", path)).into_response(),
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_render_index_interposes_name() {
        let html = render_index("kamina-os").unwrap();
        assert!(html.contains("kamina-os"));
        assert!(!html.contains(PROJECT_NAME_SLOT));
    }

    #[test]
    fn test_render_index_escapes_name() {
        let html = render_index("<script>alert(1)</script>").unwrap();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""q" 'x'"#), "&quot;q&quot; &#39;x&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[tokio::test]
    async fn test_assets_handler_not_found() {
        let response = assets_handler(Path("nonexistent.js".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assets_handler_serves_js() {
        let response = assets_handler(Path("app.js".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().contains("javascript"));
    }
}
