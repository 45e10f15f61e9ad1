//! Project inspection configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version reported when the manifest is missing or has no `version` field.
pub const FALLBACK_VERSION: &str = "1.0.0";

/// Where the project lives and how to describe it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Display name. Derived from the root directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Directory that is inspected and served as static files.
    pub root: PathBuf,
    /// Manifest file name, relative to `root`.
    pub manifest: String,
    pub fallback_version: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            root: PathBuf::from("."),
            manifest: "package.json".to_string(),
            fallback_version: FALLBACK_VERSION.to_string(),
        }
    }
}

impl ProjectConfig {
    /// Resolve the project name: explicit name, then the root's directory name.
    pub fn resolved_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }

        let root = std::fs::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());
        dir_name(&root).unwrap_or_else(|| "project".to_string())
    }

    /// Absolute or root-relative path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}
