//! Escape-time colouring.
//!
//! Each pixel seeds a multibrot orbit `z -> z^p + z0` with
//! `z0 = m(intensity) * unit`. The smooth escape time is folded into a
//! mirrored cycle of length `cmap_period` and looked up in the colormap.
//! Orbits that never escape are interior and painted black.

use num_complex::Complex64;

use crate::error::Result;
use crate::types::{ArtConfig, Colormap, Colour, IntensityField, PixelRect, UnitField};

use super::raster::Raster;

/// Slack on the bailout test so pixels sitting exactly on the circle
/// (unpainted ones) are not counted as escaped.
const BAILOUT_EPSILON: f64 = 1e-6;

/// Keeps `1 / intensity` finite for unpainted pixels.
const INTENSITY_EPSILON: f64 = 1e-7;

/// Largest exponent iterated by repeated multiplication.
const MAX_INTEGER_POWER: f64 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Power {
    Integer(u32),
    Real(f64),
}

impl Power {
    fn new(p: f64) -> Self {
        if p.fract() == 0.0 && p >= 1.0 && p <= MAX_INTEGER_POWER {
            Power::Integer(p as u32)
        } else {
            Power::Real(p)
        }
    }

    fn apply(self, z: Complex64) -> Complex64 {
        match self {
            Power::Integer(n) => z.powu(n),
            Power::Real(p) => {
                if z == Complex64::new(0.0, 0.0) {
                    z
                } else {
                    z.powf(p)
                }
            }
        }
    }
}

/// Maps (intensity, unit) layers to colours.
#[derive(Debug, Clone)]
pub struct FractalColorMapper {
    colormap: Colormap,
    bailout: f64,
    max_it: u32,
    power: Power,
    period: f64,
}

impl FractalColorMapper {
    /// Build a mapper from a validated config.
    pub fn from_config(config: &ArtConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            colormap: Colormap::builtin(&config.cmap_name)?,
            bailout: config.bailout_radius,
            max_it: config.max_it,
            power: Power::new(config.power),
            period: config.cmap_period,
        })
    }

    pub fn colormap(&self) -> &Colormap {
        &self.colormap
    }

    pub fn bailout(&self) -> f64 {
        self.bailout
    }

    /// Orbit seed modulus for a painted intensity: `min(sqrt(1/i), bailout)`.
    pub fn seed_modulus(&self, intensity: f64) -> f64 {
        (1.0 / (intensity + INTENSITY_EPSILON)).sqrt().min(self.bailout)
    }

    /// Smooth escape time of the orbit from `z0`, or `None` if it stays
    /// bounded for `max_it` iterations.
    ///
    /// A pixel that escapes when tested at iteration `it` gets a time in
    /// `(it, it + 1]`.
    pub fn escape_time(&self, z0: Complex64) -> Option<f64> {
        let limit = self.bailout + BAILOUT_EPSILON;
        let mut z = z0;
        for it in 0..self.max_it {
            let r = z.norm();
            if r > limit {
                return Some(it as f64 + (1.0 - r / self.bailout).exp());
            }
            if it + 1 < self.max_it {
                z = self.power.apply(z) + z0;
            }
        }
        None
    }

    /// Colour for an escape time (or interior).
    pub fn colour_for(&self, time: Option<f64>) -> Colour {
        let Some(t) = time else {
            return Colour::BLACK;
        };
        // outside starts at the bottom of the colormap
        let t = (t - 1.0).max(0.0);
        let cycle = (t / self.period).floor();
        let mut s = (t % self.period) / self.period;
        if cycle % 2.0 == 1.0 {
            s = 1.0 - s;
        }
        self.colormap.lookup(s)
    }

    /// Colour of one pixel.
    pub fn pixel(&self, unit: Complex64, intensity: f64) -> Colour {
        let z0 = unit * self.seed_modulus(intensity);
        self.colour_for(self.escape_time(z0))
    }

    /// Colour every pixel.
    pub fn colorize(&self, unit: &UnitField, intensity: &IntensityField) -> Raster {
        let (width, height) = unit.shape();
        self.colorize_rect(unit, intensity, PixelRect::full(width, height))
    }

    /// Colour only `rect`. Pixels of `rect` off the canvas are transparent.
    pub fn colorize_rect(&self, unit: &UnitField, intensity: &IntensityField, rect: PixelRect) -> Raster {
        let mut out = Raster::new(rect.width, rect.height);
        for (ly, gy) in rect.rows() {
            let Some(gy) = gy else { continue };
            for (lx, gx) in rect.columns() {
                let Some(gx) = gx else { continue };
                if let (Some(u), Some(i)) = (unit.get(gx, gy), intensity.get(gx, gy)) {
                    out.set_pixel(lx, ly, self.pixel(u, i));
                }
            }
        }
        out
    }
}

/// Colour a full field under `config`.
pub fn colorize(unit: &UnitField, intensity: &IntensityField, config: &ArtConfig) -> Result<Raster> {
    Ok(FractalColorMapper::from_config(config)?.colorize(unit, intensity))
}
