//! Project manifest (`fractalinator.yaml`) parsing.
//!
//! The manifest names where session files live, where renders go, and
//! config defaults shared by every artwork in the project.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::error::{ArtError, Result};

/// Project manifest loaded from `fractalinator.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Directories to scan for session files. Empty means the project root.
    pub sources: Vec<String>,

    /// Output directory for rendered PNGs.
    pub output: PathBuf,

    /// Default export scale.
    pub scale: Option<usize>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Config keys applied to every artwork unless its frontmatter sets them.
    pub defaults: Mapping,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: PathBuf::from("dist"),
            scale: None,
            excludes: vec![],
            defaults: Mapping::new(),
        }
    }
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ArtError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", super::MANIFEST_FILENAME)),
        })
    }

    /// Whether any exclude pattern matches `path`.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes.iter().any(|pattern| matches_pattern(&path, pattern))
    }

    /// Source paths, defaulting to the project root.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    pub fn effective_scale(&self) -> usize {
        self.scale.unwrap_or(1)
    }
}

/// Minimal glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a plain substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        return match rest.strip_suffix("/*") {
            Some(dir) => path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir)),
            None => path.ends_with(rest) || path.contains(&format!("/{}", rest)),
        };
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !suffix.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }

    path.contains(pattern)
}
