//! Response payloads produced by the self-inspector.

use super::classify::{FileTypeCounts, ProjectCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Liveness verdict carried in `HealthReport::status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Error,
}

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthState,
    pub project_name: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    /// Top-level entries of the project root (not recursive)
    pub file_count: usize,
    pub uptime_seconds: f64,
    pub memory_stats: MemoryStats,
    pub runtime_version: String,
}

/// Memory usage of the serving process, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStats {
    pub rss_bytes: u64,
    pub virtual_bytes: u64,
    pub system_total_bytes: u64,
    pub system_used_bytes: u64,
}

/// Payload of `GET /api/project-info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    pub category: ProjectCategory,
    pub file_type_counts: FileTypeCounts,
    pub manifest_dependencies: Map<String, Value>,
    pub manifest_scripts: Map<String, Value>,
}

/// Identifies the running binary: `peerwatch/0.1.0 (linux-x86_64)`.
pub fn runtime_version() -> String {
    format!(
        "{}/{} ({}-{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
