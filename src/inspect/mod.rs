//! Self-inspection of the project directory and manifest.
//!
//! Everything is recomputed per call; nothing is cached between requests.
//! All methods perform blocking filesystem I/O and are meant to be driven
//! from `tokio::task::spawn_blocking` when called inside the server.

mod classify;
mod error;
mod manifest;
mod types;


pub use classify::{FileKind, FileTypeCounts, ProjectCategory};
pub use error::InspectError;
pub use manifest::Manifest;
pub use types::{runtime_version, HealthReport, HealthState, MemoryStats, ProjectInfo};

use crate::config::ProjectConfig;
use std::path::{Path, PathBuf};
use std::time::Instant;
use sysinfo::{ProcessesToUpdate, System};

/// Reads local project state and produces health and info reports.
#[derive(Debug, Clone)]
pub struct SelfInspector {
    config: ProjectConfig,
    project_name: String,
    start_time: Instant,
}

impl SelfInspector {
    /// Create an inspector; uptime is measured from this call.
    pub fn new(config: ProjectConfig) -> Self {
        let project_name = config.resolved_name();
        Self {
            config,
            project_name,
            start_time: Instant::now(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Load the manifest, or an empty one when the file is absent.
    pub fn manifest(&self) -> Result<Manifest, InspectError> {
        Manifest::load(&self.config.manifest_path())
    }

    /// Number of top-level entries in the project root.
    pub fn file_count(&self) -> Result<usize, InspectError> {
        let root = self.root();
        let entries = std::fs::read_dir(root).map_err(|source| InspectError::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;

        let mut count = 0;
        for entry in entries {
            entry.map_err(|source| InspectError::ReadDir {
                path: root.to_path_buf(),
                source,
            })?;
            count += 1;
        }
        Ok(count)
    }

    /// Build the `GET /api/health` payload.
    pub fn health(&self) -> Result<HealthReport, InspectError> {
        let file_count = self.file_count()?;
        let manifest = self.manifest()?;

        Ok(HealthReport {
            status: HealthState::Healthy,
            project_name: self.project_name.clone(),
            timestamp: chrono::Utc::now(),
            version: manifest
                .version
                .unwrap_or_else(|| self.config.fallback_version.clone()),
            file_count,
            uptime_seconds: self.start_time.elapsed().as_secs_f64(),
            memory_stats: collect_memory_stats(),
            runtime_version: runtime_version(),
        })
    }

    /// Build the `GET /api/project-info` payload from a recursive walk.
    pub fn project_info(&self) -> Result<ProjectInfo, InspectError> {
        let mut counts = FileTypeCounts::default();
        walk(self.root(), &mut |path| counts.record(path))?;
        let manifest = self.manifest()?;

        Ok(ProjectInfo {
            name: self.project_name.clone(),
            category: ProjectCategory::from_project_name(&self.project_name),
            file_type_counts: counts,
            manifest_dependencies: manifest.dependencies,
            manifest_scripts: manifest.scripts,
        })
    }
}

/// Visit every entry below `dir`, directories included. Symlinks are not followed.
fn walk(dir: &Path, visit: &mut dyn FnMut(&Path)) -> Result<(), InspectError> {
    let read_err = |source| InspectError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path: PathBuf = entry.path();
        visit(&path);

        if entry.file_type().map_err(read_err)?.is_dir() {
            walk(&path, visit)?;
        }
    }
    Ok(())
}

/// Snapshot memory usage of this process. Missing data is reported as zero.
pub fn collect_memory_stats() -> MemoryStats {
    let mut system = System::new();
    system.refresh_memory();

    let mut stats = MemoryStats {
        system_total_bytes: system.total_memory(),
        system_used_bytes: system.used_memory(),
        ..Default::default()
    };

    match sysinfo::get_current_pid() {
        Ok(pid) => {
            system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
            if let Some(process) = system.process(pid) {
                stats.rss_bytes = process.memory();
                stats.virtual_bytes = process.virtual_memory();
            }
        }
        Err(e) => tracing::debug!(error = e, "Current pid unavailable, skipping process memory"),
    }

    stats
}
