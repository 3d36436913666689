//! PNG output for rendered artwork.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{ArtError, Result};

use super::Raster;

/// Write a raster to a PNG file, creating parent directories as needed.
pub fn write_png(raster: &Raster, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ArtError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create directory: {}", e),
            })?;
        }
    }

    let bytes = encode_png(raster)?;
    std::fs::write(path, bytes).map_err(|e| ArtError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            raster.as_bytes(),
            raster.width() as u32,
            raster.height() as u32,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ArtError::Parse {
            message: format!("Failed to encode PNG: {}", e),
            help: None,
        })?;
    Ok(out)
}
