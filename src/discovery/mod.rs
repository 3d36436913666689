//! File discovery and session loading.
//!
//! Finds every `*.art.md` file in a project, either by scanning the whole
//! directory or the sources listed in a `fractalinator.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use fractalinator::discovery::discover;
//!
//! let result = discover("./gallery")?;
//! for loaded in result.load()? {
//!     println!("{} from {}", loaded.session.name, loaded.path.display());
//! }
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{ArtError, Result};

pub use loader::{load_file, load_sessions, LoadedSession};
pub use manifest::Manifest;
pub use scanner::{is_session_file, scan_directory, scan_sources, ScanResult, SESSION_EXTENSION};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "fractalinator.yaml";

/// Result of discovering sessions in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    pub root: PathBuf,
    /// The loaded manifest, or the default when none was found.
    pub manifest: Manifest,
    pub has_manifest: bool,
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Parse every discovered file.
    pub fn load(&self) -> Result<Vec<LoadedSession>> {
        load_sessions(&self.scan, &self.manifest)
    }
}

/// Discover sessions under a project directory.
///
/// Uses the manifest's sources when `fractalinator.yaml` exists at the
/// root, otherwise scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover sessions from explicit files and directories.
///
/// A manifest in the current directory still supplies defaults and
/// excludes. Files named explicitly are taken whatever their extension;
/// a path that does not exist is an error.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest_path = Path::new(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let mut scan = ScanResult::new();
    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if path.is_file() {
            scan.merge(ScanResult {
                sessions: vec![path.clone()],
            });
        } else {
            return Err(ArtError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    Ok(DiscoveryResult {
        root: PathBuf::from("."),
        manifest,
        has_manifest,
        scan,
    })
}
