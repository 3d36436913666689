//! Session loader: parses discovered files into sessions.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArtError, Result};
use crate::parser::parse_documents;
use crate::types::Session;

use super::manifest::Manifest;
use super::scanner::ScanResult;

/// A session together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSession {
    pub path: PathBuf,
    pub session: Session,
}

/// Load every scanned file, applying manifest defaults.
///
/// All files are attempted; failures are reported together.
pub fn load_sessions(scan: &ScanResult, manifest: &Manifest) -> Result<Vec<LoadedSession>> {
    let mut loaded = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for path in &scan.sessions {
        match load_file(path, manifest) {
            Ok(sessions) => loaded.extend(sessions.into_iter().map(|session| LoadedSession {
                path: path.clone(),
                session,
            })),
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    if !errors.is_empty() {
        return Err(ArtError::Load {
            message: format!("Failed to load {} file(s):\n  {}", errors.len(), errors.join("\n  ")),
            help: Some("Fix the errors above and try again".to_string()),
        });
    }

    Ok(loaded)
}

/// Load the sessions of one file.
pub fn load_file(path: &Path, manifest: &Manifest) -> Result<Vec<Session>> {
    let content = fs::read_to_string(path).map_err(|e| ArtError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_documents(&content)?
        .into_iter()
        .map(|doc| doc.with_defaults(&manifest.defaults).into_session())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_applies_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pair.art.md");
        fs::write(&path, "---\nname: a\n---\n\n---\nname: b\ncmap_name: hot\n---\n").unwrap();

        let manifest = Manifest::parse("defaults:\n  cmap_name: jet\n").unwrap();
        let scan = ScanResult {
            sessions: vec![path.clone()],
        };
        let loaded = load_sessions(&scan, &manifest).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].session.config.cmap_name, "jet");
        assert_eq!(loaded[1].session.config.cmap_name, "hot");
        assert_eq!(loaded[1].path, path);
    }

    #[test]
    fn test_load_reports_every_failure() {
        let dir = tempdir().unwrap();
        let bad_a = dir.path().join("a.art.md");
        let bad_b = dir.path().join("b.art.md");
        fs::write(&bad_a, "no frontmatter").unwrap();
        fs::write(&bad_b, "---\nname: b\nwat: 1\n---\n").unwrap();

        let scan = ScanResult {
            sessions: vec![bad_a, bad_b],
        };
        let err = load_sessions(&scan, &Manifest::default()).unwrap_err();

        let text = err.to_string();
        assert!(text.contains("Failed to load 2 file(s)"));
        assert!(text.contains("a.art.md"));
        assert!(text.contains("b.art.md"));
    }
}
