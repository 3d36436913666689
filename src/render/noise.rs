//! Deterministic complex unit-noise synthesis.
//!
//! Real and imaginary parts are independent Gaussian white-noise grids,
//! each smoothed by a separable Gaussian filter with periodic boundaries,
//! then normalised to unit modulus. The same `(seed, sigma, shape)` always
//! gives the same field bit-for-bit.

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::{ArtError, Result};
use crate::types::{ArtConfig, Grid, UnitField};

/// Offset between the real-part and imaginary-part seeds.
const IMAG_SEED_OFFSET: u64 = 22;

/// Produces unit-noise fields for one `(seed, sigma)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSynthesizer {
    seed: u64,
    sigma: f64,
}

impl FieldSynthesizer {
    pub fn new(seed: u64, sigma: f64) -> Result<Self> {
        if !(sigma.is_finite() && sigma >= 0.0) {
            return Err(ArtError::config(format!(
                "noise_sig must be zero or positive, got {}",
                sigma
            )));
        }
        Ok(Self { seed, sigma })
    }

    /// Synthesizer for a config, drawing a random seed if none is set.
    pub fn from_config(config: &ArtConfig) -> Result<Self> {
        Self::new(resolve_seed(config), config.noise_sig)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Unit field of the given `(width, height)`.
    pub fn synthesize(&self, shape: (usize, usize)) -> Result<UnitField> {
        let (width, height) = check_shape(shape)?;

        let real = self.smoothed(width, height, self.seed);
        let imag = self.smoothed(width, height, self.seed.wrapping_add(IMAG_SEED_OFFSET));

        let data = real
            .as_slice()
            .iter()
            .zip(imag.as_slice())
            .map(|(&re, &im)| normalise(Complex64::new(re, im)))
            .collect();

        Grid::from_vec(width, height, data)
    }

    /// Unit field at `sf` times the linear resolution of `shape`.
    ///
    /// The base field is bilinearly upsampled and renormalised, so features
    /// land in the same place at every scale. `sf = 1` is [`synthesize`].
    ///
    /// [`synthesize`]: FieldSynthesizer::synthesize
    pub fn synthesize_scaled(&self, shape: (usize, usize), sf: usize) -> Result<UnitField> {
        if sf == 0 {
            return Err(ArtError::config("scale factor must be at least 1"));
        }
        upscale(self.synthesize(shape)?, sf)
    }

    fn smoothed(&self, width: usize, height: usize, seed: u64) -> Grid<f64> {
        smooth(&white_noise(width, height, seed), self.sigma)
    }
}

/// Synthesize the unit field for a config at its own shape.
pub fn synthesize(config: &ArtConfig, shape: (usize, usize)) -> Result<UnitField> {
    FieldSynthesizer::from_config(config)?.synthesize(shape)
}

/// Upsample an already synthesized field by `sf` and renormalise it.
pub fn upscale(base: UnitField, sf: usize) -> Result<UnitField> {
    match sf {
        0 => Err(ArtError::config("scale factor must be at least 1")),
        1 => Ok(base),
        _ => Ok(base.upsample(sf).map(normalise)),
    }
}

/// The config's seed, or a fresh random one.
pub fn resolve_seed(config: &ArtConfig) -> u64 {
    config
        .noise_seed
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..1_000_000))
}

fn check_shape((width, height): (usize, usize)) -> Result<(usize, usize)> {
    if width == 0 || height == 0 {
        return Err(ArtError::config(format!(
            "shape must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    Ok((width, height))
}

fn normalise(z: Complex64) -> Complex64 {
    let m = z.norm();
    if m > 0.0 && m.is_finite() {
        z / m
    } else {
        Complex64::new(1.0, 0.0)
    }
}

/// Standard normal samples, seeded.
pub fn white_noise(width: usize, height: usize, seed: u64) -> Grid<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_fn(width, height, |_, _| rng.sample::<f64, _>(StandardNormal))
}

/// Normalised 1D Gaussian taps for `sigma`, radius `ceil(3 sigma)`.
pub fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let radius = (3.0 * sigma).ceil() as i64;
    let taps: Vec<f64> = (-radius..=radius)
        .map(|i| (-(i * i) as f64 / (2.0 * sigma * sigma)).exp())
        .collect();
    let total: f64 = taps.iter().sum();
    taps.into_iter().map(|t| t / total).collect()
}

/// Separable Gaussian blur with wrap-around edges.
pub fn smooth(grid: &Grid<f64>, sigma: f64) -> Grid<f64> {
    let taps = gaussian_kernel(sigma);
    if taps.len() == 1 {
        return grid.clone();
    }
    let radius = (taps.len() / 2) as i64;
    let (width, height) = grid.shape();

    let mut horizontal = Grid::filled(width, height, 0.0);
    for y in 0..height {
        let row = grid.row(y);
        for x in 0..width {
            let mut acc = 0.0;
            for (k, tap) in taps.iter().enumerate() {
                let sx = (x as i64 + k as i64 - radius).rem_euclid(width as i64) as usize;
                acc += tap * row[sx];
            }
            horizontal[(x, y)] = acc;
        }
    }

    let mut out = Grid::filled(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, tap) in taps.iter().enumerate() {
                let sy = (y as i64 + k as i64 - radius).rem_euclid(height as i64) as usize;
                acc += tap * horizontal[(x, sy)];
            }
            out[(x, y)] = acc;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_is_deterministic() {
        let synth = FieldSynthesizer::new(42, 3.0).unwrap();
        let a = synth.synthesize((40, 24)).unwrap();
        let b = synth.synthesize((40, 24)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_field() {
        let a = FieldSynthesizer::new(1, 2.0).unwrap().synthesize((16, 16)).unwrap();
        let b = FieldSynthesizer::new(2, 2.0).unwrap().synthesize((16, 16)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unit_modulus() {
        let field = FieldSynthesizer::new(9, 1.5).unwrap().synthesize((17, 5)).unwrap();
        assert_eq!(field.shape(), (17, 5));
        for z in field.as_slice() {
            assert!((z.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_sigma_is_unsmoothed() {
        let field = FieldSynthesizer::new(3, 0.0).unwrap().synthesize((8, 8)).unwrap();
        let re = white_noise(8, 8, 3);
        let im = white_noise(8, 8, 3 + IMAG_SEED_OFFSET);
        let expected = normalise(Complex64::new(re[(2, 5)], im[(2, 5)]));
        assert_eq!(field[(2, 5)], expected);
    }

    #[test]
    fn test_white_noise_is_standard_normal() {
        let noise = white_noise(128, 128, 17);
        assert_eq!(noise, white_noise(128, 128, 17));

        let n = noise.as_slice().len() as f64;
        let mean = noise.as_slice().iter().sum::<f64>() / n;
        let var = noise.as_slice().iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((var - 1.0).abs() < 0.05, "variance {}", var);
    }

    #[test]
    fn test_single_pixel_field() {
        let field = FieldSynthesizer::new(0, 26.0).unwrap().synthesize((1, 1)).unwrap();
        assert_eq!(field.shape(), (1, 1));
        assert!((field[(0, 0)].norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(FieldSynthesizer::new(0, -0.5).is_err());
        assert!(FieldSynthesizer::new(0, f64::NAN).is_err());
        let synth = FieldSynthesizer::new(0, 1.0).unwrap();
        assert!(synth.synthesize((0, 4)).is_err());
        assert!(synth.synthesize_scaled((4, 4), 0).is_err());
    }

    #[test]
    fn test_scaled_matches_base_at_one() {
        let synth = FieldSynthesizer::new(5, 2.0).unwrap();
        let base = synth.synthesize((12, 9)).unwrap();
        assert_eq!(synth.synthesize_scaled((12, 9), 1).unwrap(), base);
    }

    #[test]
    fn test_scaled_aligns_with_base() {
        let synth = FieldSynthesizer::new(5, 2.0).unwrap();
        let base = synth.synthesize((12, 9)).unwrap();
        let up = synth.synthesize_scaled((12, 9), 3).unwrap();

        assert_eq!(up.shape(), (36, 27));
        // every sf-th sample sits exactly on a base pixel
        let a = up[(6, 9)];
        let b = base[(2, 3)];
        assert!((a - b).norm() < 1e-12);
    }

    #[test]
    fn test_gaussian_kernel_normalised() {
        let taps = gaussian_kernel(2.0);
        assert_eq!(taps.len(), 13);
        assert!((taps.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(taps[0], taps[12]);
        assert_eq!(gaussian_kernel(0.0), vec![1.0]);
    }

    #[test]
    fn test_smooth_preserves_constant() {
        let grid = Grid::filled(5, 4, 2.5);
        let out = smooth(&grid, 4.0);
        for v in out.as_slice() {
            assert!((v - 2.5).abs() < 1e-12);
        }
    }
}
