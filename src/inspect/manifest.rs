//! Optional project manifest (`package.json`-style metadata).

use super::InspectError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// The subset of manifest fields peerwatch reports.
///
/// Unknown fields are ignored; `dependencies` and `scripts` are kept verbatim.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Manifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub dependencies: Map<String, Value>,
    pub scripts: Map<String, Value>,
}

impl Manifest {
    /// Read the manifest at `path`.
    ///
    /// A missing file yields an empty manifest; unreadable or malformed files are errors.
    pub fn load(path: &Path) -> Result<Self, InspectError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No manifest found, using empty manifest");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(InspectError::ReadManifest {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| InspectError::ParseManifest {
            path: path.to_path_buf(),
            source,
        })
    }
}
