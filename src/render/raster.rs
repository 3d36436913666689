//! RGBA raster buffers.
//!
//! A [`Raster`] is the flat byte layout a browser `ImageData` expects:
//! row-major, four bytes per pixel, alpha last.

use image::{ImageBuffer, RgbaImage};

use crate::types::{Colour, PixelRect};

/// Bytes per pixel.
pub const CHANNELS: usize = 4;

/// An RGBA byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// A fully transparent raster.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
        }
    }

    /// Build from colours in row-major order.
    pub fn from_colours(width: usize, height: usize, colours: impl IntoIterator<Item = Colour>) -> Self {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for colour in colours.into_iter().take(width * height) {
            data.extend_from_slice(&colour.to_rgba());
        }
        data.resize(width * height * CHANNELS, 0);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The flat RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Pixel colour, or `None` outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * CHANNELS;
        let p = &self.data[i..i + CHANNELS];
        Some(Colour::new(p[0], p[1], p[2], p[3]))
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, colour: Colour) {
        if x < self.width && y < self.height {
            let i = (y * self.width + x) * CHANNELS;
            self.data[i..i + CHANNELS].copy_from_slice(&colour.to_rgba());
        }
    }

    /// Copy `rect` out of this raster. Pixels beyond the edges are transparent.
    pub fn extract(&self, rect: PixelRect) -> Raster {
        let mut out = Raster::new(rect.width, rect.height);
        for (ly, gy) in rect.rows() {
            for (lx, gx) in rect.columns() {
                if let (Some(gx), Some(gy)) = (gx, gy) {
                    if let Some(c) = self.pixel(gx, gy) {
                        out.set_pixel(lx, ly, c);
                    }
                }
            }
        }
        out
    }

    /// Write the on-canvas part of a patch back into this raster.
    pub fn blit(&mut self, patch: &Patch) {
        let Some((xs, ys)) = patch.rect.clip(self.width, self.height) else {
            return;
        };
        let row_bytes = (xs.end - xs.start) * CHANNELS;
        for gy in ys {
            let ly = (gy as i64 - patch.rect.y) as usize;
            let lx = (xs.start as i64 - patch.rect.x) as usize;
            let src = (ly * patch.raster.width + lx) * CHANNELS;
            let dst = (gy * self.width + xs.start) * CHANNELS;
            self.data[dst..dst + row_bytes].copy_from_slice(&patch.raster.data[src..src + row_bytes]);
        }
    }

    /// Convert to an `image` buffer for encoding.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_raw(self.width as u32, self.height as u32, self.data.clone())
            .unwrap_or_else(|| ImageBuffer::new(self.width as u32, self.height as u32))
    }
}

/// A recoloured square returned by a stroke, positioned on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Canvas placement; the origin may be negative.
    pub rect: PixelRect,
    pub raster: Raster,
}

impl Patch {
    pub fn as_bytes(&self) -> &[u8] {
        self.raster.as_bytes()
    }

    /// Side length for square brush patches.
    pub fn side(&self) -> usize {
        self.rect.width
    }
}
