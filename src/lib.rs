//! peerwatch - project node health and peer dashboard
//!
//! Serves a self health report, introspects the project directory and its
//! optional manifest, and polls a configured set of sibling services,
//! presenting everything on a small HTML dashboard.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod inspect;
pub mod logging;
pub mod metrics;
pub mod peers;
