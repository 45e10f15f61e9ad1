//! Web dashboard served at `/`.
//!
//! The page is a static document with the project name interposed. All data
//! is fetched client-side from the JSON API and rendered by small DOM
//! components in `dashboard/app.js`.

pub mod handler;

pub use handler::{assets_handler, dashboard_handler, render_index};
