//! Init command implementation.
//!
//! Writes a starter session file, and optionally a project manifest.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::MANIFEST_FILENAME;
use crate::error::{ArtError, Result};
use crate::output::{display_path, Printer};
use crate::types::ArtConfig;

/// File written by `init`.
pub const STARTER_FILENAME: &str = "artwork.art.md";

/// Write a starter artwork.art.md
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Also write a fractalinator.yaml manifest
    #[arg(long)]
    pub manifest: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    fs::create_dir_all(&args.path).map_err(|e| ArtError::Io {
        path: args.path.clone(),
        message: format!("Failed to create directory: {}", e),
    })?;

    let starter = args.path.join(STARTER_FILENAME);
    write_new(&starter, &starter_document(), args.force)?;
    printer.success("Created", &display_path(&starter));

    if args.manifest {
        let manifest = args.path.join(MANIFEST_FILENAME);
        write_new(&manifest, "output: dist\nscale: 1\n", args.force)?;
        printer.success("Created", &display_path(&manifest));
    }

    Ok(())
}

fn write_new(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ArtError::Io {
            path: path.to_path_buf(),
            message: "file already exists".to_string(),
        });
    }
    fs::write(path, content).map_err(|e| ArtError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

/// A session using the default parameters, with a short stroke script.
fn starter_document() -> String {
    let c = ArtConfig::default();
    let (w, h) = c.shape;
    format!(
        "\
---
name: artwork
shape: [{w}, {h}]
cmap_name: {cmap}
cmap_period: {period:?}
bailout_radius: {bailout:?}
power: {power:?}
max_it: {max_it}
noise_sig: {sig:?}
brush_radius: {radius}
brush_strength: {strength:?}
# noise_seed: 1234
---

Strokes are replayed in order before export. Each line is a point `x,y`,
a drag `line x0,y0 x1,y1`, or `erase` / `draw` to switch the brush.

```strokes
line {x0},{y} {x1},{y}
erase
{cx},{y}
```
",
        cmap = c.cmap_name,
        period = c.cmap_period,
        bailout = c.bailout_radius,
        power = c.power,
        max_it = c.max_it,
        sig = c.noise_sig,
        radius = c.brush_radius,
        strength = c.brush_strength,
        x0 = w / 4,
        x1 = 3 * w / 4,
        cx = w / 2,
        y = h / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_sessions;
    use tempfile::tempdir;

    fn init(path: &Path, force: bool, manifest: bool) -> Result<()> {
        let args = InitArgs {
            path: path.to_path_buf(),
            force,
            manifest,
        };
        run(args, &Printer::new().quiet(true))
    }

    #[test]
    fn test_starter_parses_to_defaults() {
        let sessions = parse_sessions(&starter_document()).unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].name, "artwork");
        assert_eq!(sessions[0].config, ArtConfig::default());
        assert_eq!(sessions[0].strokes.len(), 3);
    }

    #[test]
    fn test_init_creates_file() {
        let dir = tempdir().unwrap();
        init(dir.path(), false, false).unwrap();

        assert!(dir.path().join(STARTER_FILENAME).exists());
        assert!(!dir.path().join(MANIFEST_FILENAME).exists());
    }

    #[test]
    fn test_init_with_manifest() {
        let dir = tempdir().unwrap();
        init(dir.path(), false, true).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("output: dist"));
    }

    #[test]
    fn test_init_errors_if_file_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STARTER_FILENAME), "mine").unwrap();

        assert!(init(dir.path(), false, false).is_err());
        assert_eq!(fs::read_to_string(dir.path().join(STARTER_FILENAME)).unwrap(), "mine");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STARTER_FILENAME), "mine").unwrap();

        init(dir.path(), true, false).unwrap();
        let content = fs::read_to_string(dir.path().join(STARTER_FILENAME)).unwrap();
        assert!(content.contains("name: artwork"));
    }
}
