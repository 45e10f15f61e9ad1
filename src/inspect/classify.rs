//! Project category and file-type classification.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Coarse project family, derived from the project name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectCategory {
    Blockchain,
    Ai,
    Os,
    General,
}

/// Keywords checked in order; the first one contained in the name wins.
const CATEGORY_KEYWORDS: [(&str, ProjectCategory); 3] = [
    ("blockchain", ProjectCategory::Blockchain),
    ("elganyaia", ProjectCategory::Ai),
    ("kamina", ProjectCategory::Os),
];

impl ProjectCategory {
    /// Case-sensitive substring match against the fixed keyword list.
    pub fn from_project_name(name: &str) -> Self {
        CATEGORY_KEYWORDS
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or(ProjectCategory::General)
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectCategory::Blockchain => "BLOCKCHAIN",
            ProjectCategory::Ai => "AI",
            ProjectCategory::Os => "OS",
            ProjectCategory::General => "GENERAL",
        };
        f.write_str(s)
    }
}

/// Bucket a single path falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Js,
    Html,
    Json,
    Css,
    Sol,
    Py,
    Other,
}

impl FileKind {
    /// Classify by extension, compared as written on disk.
    ///
    /// Returns `None` for paths without an extension (`Makefile`, `.gitignore`);
    /// those are counted in no bucket, not even `other`.
    pub fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str().unwrap_or("\u{fffd}");
        let kind = match ext {
            "" => return None,
            "js" => FileKind::Js,
            "html" => FileKind::Html,
            "json" => FileKind::Json,
            "css" => FileKind::Css,
            "sol" => FileKind::Sol,
            "py" => FileKind::Py,
            _ => FileKind::Other,
        };
        Some(kind)
    }
}

/// Per-bucket entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeCounts {
    pub js: usize,
    pub html: usize,
    pub json: usize,
    pub css: usize,
    pub sol: usize,
    pub py: usize,
    pub other: usize,
}

impl FileTypeCounts {
    pub fn record(&mut self, path: &Path) {
        match FileKind::of(path) {
            Some(FileKind::Js) => self.js += 1,
            Some(FileKind::Html) => self.html += 1,
            Some(FileKind::Json) => self.json += 1,
            Some(FileKind::Css) => self.css += 1,
            Some(FileKind::Sol) => self.sol += 1,
            Some(FileKind::Py) => self.py += 1,
            Some(FileKind::Other) => self.other += 1,
            None => {}
        }
    }

    pub fn total(&self) -> usize {
        self.js + self.html + self.json + self.css + self.sol + self.py + self.other
    }
}
