//! Render command implementation.
//!
//! Builds each artwork, replays its strokes, and writes the export PNG.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::artwork::Artwork;
use crate::discovery::LoadedSession;
use crate::error::{ArtError, Result};
use crate::output::{display_path, format_shape, plural, Printer};
use crate::render::write_png;
use crate::types::Session;
use crate::validation::{print_diagnostics, validate_sessions};

/// Render artworks to PNG, replaying their strokes
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Session files or directories (default: the current project)
    pub files: Vec<PathBuf>,

    /// Output directory (default: the manifest's, or dist)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Export scale factor, overriding the file and manifest
    #[arg(long)]
    pub scale: Option<usize>,

    /// Noise seed for every artwork
    #[arg(long)]
    pub seed: Option<u64>,

    /// Colormap for every artwork
    #[arg(long)]
    pub colormap: Option<String>,

    /// Also write each resolved config (seed included) as <name>.yaml
    #[arg(long)]
    pub emit_config: bool,
}

/// Render everything and return the PNG paths written.
pub fn run(args: RenderArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let discovery = super::discover_inputs(&args.files)?;
    let output = args.output.clone().unwrap_or_else(|| discovery.manifest.output.clone());
    let default_scale = discovery.manifest.effective_scale();

    let mut loaded = discovery.load()?;
    for entry in &mut loaded {
        apply_overrides(&mut entry.session, &args);
    }

    let sessions: Vec<Session> = loaded.iter().map(|l| l.session.clone()).collect();
    let result = validate_sessions(&sessions, args.scale, default_scale);
    if result.has_errors() || result.has_warnings() {
        print_diagnostics(&result, printer);
    }
    if result.has_errors() {
        return Err(ArtError::Config {
            message: format!("{} found", plural(result.error_count(), "problem", "problems")),
            help: Some("Fix the errors above, or run `fractalinator check` for details".to_string()),
        });
    }

    if loaded.is_empty() {
        printer.warning("Skipped", "no .art.md files found");
        return Ok(Vec::new());
    }

    let mut written = Vec::with_capacity(loaded.len());
    for entry in &loaded {
        let scale = args.scale.or(entry.session.scale).unwrap_or(default_scale);
        written.push(render_session(entry, scale, &output, args.emit_config, printer)?);
    }

    printer.success(
        "Finished",
        &format!("{} to {}", plural(written.len(), "artwork", "artworks"), display_path(&output)),
    );
    Ok(written)
}

fn apply_overrides(session: &mut Session, args: &RenderArgs) {
    if let Some(seed) = args.seed {
        session.config.noise_seed = Some(seed);
    }
    if let Some(name) = &args.colormap {
        session.config.cmap_name = name.clone();
    }
}

fn render_session(
    entry: &LoadedSession,
    scale: usize,
    output: &Path,
    emit_config: bool,
    printer: &Printer,
) -> Result<PathBuf> {
    let session = &entry.session;
    let mut art = Artwork::new(session.config.clone())?;
    printer.status(
        "Rendering",
        &format!(
            "{} ({}, seed {}) {}",
            session.name,
            format_shape(art.shape()),
            art.seed(),
            printer.dim(&display_path(&entry.path))
        ),
    );

    let painted = art.replay(&session.strokes)?;
    if painted > 0 {
        printer.info("Painted", &plural(painted, "stroke point", "stroke points"));
    }

    let raster = art.high_res(scale)?;
    let png_path = output.join(format!("{}.png", session.name));
    write_png(&raster, &png_path)?;

    if emit_config {
        let yaml_path = output.join(format!("{}.yaml", session.name));
        std::fs::write(&yaml_path, art.config().to_yaml()?).map_err(|e| ArtError::Io {
            path: yaml_path.clone(),
            message: format!("Failed to write config: {}", e),
        })?;
    }

    printer.success(
        "Wrote",
        &format!("{} ({})", display_path(&png_path), format_shape(raster.shape())),
    );
    Ok(png_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SMALL: &str = "\
---
name: tiny
shape: [24, 16]
noise_sig: 2
brush_radius: 3
max_it: 12
scale: 2
---

```strokes
4,4
line 4,8 12,8
```
";

    fn args(files: Vec<PathBuf>, output: PathBuf) -> RenderArgs {
        RenderArgs {
            files,
            output: Some(output),
            scale: None,
            seed: Some(5),
            colormap: None,
            emit_config: false,
        }
    }

    fn quiet() -> Printer {
        Printer::new().quiet(true)
    }

    #[test]
    fn test_render_writes_scaled_png() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tiny.art.md");
        fs::write(&file, SMALL).unwrap();
        let out = dir.path().join("dist");

        let written = run(args(vec![file], out.clone()), &quiet()).unwrap();

        assert_eq!(written, vec![out.join("tiny.png")]);
        let img = image::open(&written[0]).unwrap();
        assert_eq!((img.width(), img.height()), (48, 32));
    }

    #[test]
    fn test_scale_flag_overrides_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tiny.art.md");
        fs::write(&file, SMALL).unwrap();

        let mut a = args(vec![file], dir.path().join("out"));
        a.scale = Some(1);
        a.emit_config = true;
        let written = run(a, &quiet()).unwrap();

        let img = image::open(&written[0]).unwrap();
        assert_eq!((img.width(), img.height()), (24, 16));

        let yaml = fs::read_to_string(dir.path().join("out/tiny.yaml")).unwrap();
        assert!(yaml.contains("noise_seed: 5"));
    }

    #[test]
    fn test_render_is_reproducible() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tiny.art.md");
        fs::write(&file, SMALL).unwrap();

        let first = run(args(vec![file.clone()], dir.path().join("a")), &quiet()).unwrap();
        let second = run(args(vec![file], dir.path().join("b")), &quiet()).unwrap();

        assert_eq!(fs::read(&first[0]).unwrap(), fs::read(&second[0]).unwrap());
    }

    #[test]
    fn test_invalid_session_is_not_rendered() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("bad.art.md");
        fs::write(&file, "---\nname: bad\nshape: [8, 8]\n---\n\n```strokes\n20,20\n```\n").unwrap();
        let out = dir.path().join("dist");

        assert!(run(args(vec![file], out.clone()), &quiet()).is_err());
        assert!(!out.join("bad.png").exists());
    }

    #[test]
    fn test_zero_scale_fails_before_writing() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.art.md");
        let second = dir.path().join("b.art.md");
        fs::write(&first, SMALL.replace("name: tiny", "name: a")).unwrap();
        fs::write(&second, SMALL.replace("name: tiny", "name: b")).unwrap();
        let out = dir.path().join("dist");

        let mut a = args(vec![first, second], out.clone());
        a.scale = Some(0);
        assert!(run(a, &quiet()).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_colormap_override() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tiny.art.md");
        fs::write(&file, SMALL).unwrap();

        let mut a = args(vec![file], dir.path().join("out"));
        a.colormap = Some("nope".to_string());
        assert!(run(a, &quiet()).is_err());
    }
}
