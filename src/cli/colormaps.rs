//! Colormaps command: list the built-in colormaps.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::error::{ArtError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_png, Raster};
use crate::types::{Colormap, LUT_SIZE};

/// Height of preview strips in pixels.
const PREVIEW_HEIGHT: usize = 24;

/// List the built-in colormaps
#[derive(Args, Debug)]
pub struct ColormapsArgs {
    /// Print JSON with each map's end and middle colours
    #[arg(long)]
    pub json: bool,

    /// Write a gradient strip PNG per colormap into this directory
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

pub fn run(args: ColormapsArgs, printer: &Printer) -> Result<()> {
    let maps = Colormap::names()
        .map(Colormap::builtin)
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let entries: Vec<_> = maps
            .iter()
            .map(|m| {
                json!({
                    "name": m.name(),
                    "start": m.lookup(0.0).to_string(),
                    "middle": m.lookup(0.5).to_string(),
                    "end": m.lookup(1.0).to_string(),
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&entries).map_err(|e| ArtError::Parse {
            message: format!("Failed to serialize colormaps: {}", e),
            help: None,
        })?;
        println!("{}", text);
    } else {
        for m in &maps {
            println!("{}", m.name());
        }
    }

    if let Some(dir) = &args.preview {
        for m in &maps {
            write_png(&preview_strip(m), &dir.join(format!("{}.png", m.name())))?;
        }
        printer.success(
            "Wrote",
            &format!("{} to {}", plural(maps.len(), "preview", "previews"), display_path(dir)),
        );
    }

    printer.info("Hint", "append _r to any name to reverse it");
    Ok(())
}

/// A horizontal gradient of every lookup table entry.
pub fn preview_strip(map: &Colormap) -> Raster {
    let entries = map.entries();
    let colours = (0..LUT_SIZE * PREVIEW_HEIGHT).map(|i| entries[i % LUT_SIZE]);
    Raster::from_colours(LUT_SIZE, PREVIEW_HEIGHT, colours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_preview_strip_is_a_gradient() {
        let map = Colormap::builtin("gray").unwrap();
        let strip = preview_strip(&map);

        assert_eq!(strip.shape(), (LUT_SIZE, PREVIEW_HEIGHT));
        assert_eq!(strip.pixel(0, 0), Some(Colour::BLACK));
        assert_eq!(strip.pixel(LUT_SIZE - 1, PREVIEW_HEIGHT - 1), Some(Colour::WHITE));
    }

    #[test]
    fn test_run_writes_previews() {
        let dir = tempdir().unwrap();
        let args = ColormapsArgs {
            json: true,
            preview: Some(dir.path().to_path_buf()),
        };
        run(args, &Printer::new().quiet(true)).unwrap();

        assert!(dir.path().join("viridis.png").exists());
        assert_eq!(
            std::fs::read_dir(dir.path()).unwrap().count(),
            Colormap::names().count()
        );
    }
}
