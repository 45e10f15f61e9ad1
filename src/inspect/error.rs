//! Error types for project inspection.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading local project state.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Directory listing failed
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest exists but could not be read
    #[error("failed to read manifest {path}: {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid JSON or has the wrong shape
    #[error("failed to parse manifest {path}: {source}")]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Blocking inspection task panicked or was cancelled
    #[error("inspection task failed: {0}")]
    Task(String),
}
