//! File system scanner for session files.
//!
//! Recursively walks directories collecting every `*.art.md` file.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Double extension marking a session file.
pub const SESSION_EXTENSION: &str = ".art.md";

/// Session files found by a scan, in walk order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanResult {
    pub sessions: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn merge(&mut self, other: ScanResult) {
        for path in other.sessions {
            if !self.sessions.contains(&path) {
                self.sessions.push(path);
            }
        }
    }
}

/// Scan a directory tree for session files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || manifest.is_excluded(path) {
            continue;
        }
        if is_session_file(path) {
            result.sessions.push(path.to_path_buf());
        }
    }

    result
}

/// Scan manifest source paths relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };
        result.merge(scan_directory(&source_path, manifest));
    }

    result
}

pub fn is_session_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.ends_with(SESSION_EXTENSION) && name.len() > SESSION_EXTENSION.len())
}
