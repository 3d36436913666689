//! The interactive artwork.
//!
//! An [`Artwork`] owns the unit noise field, the painted intensity field and
//! a cached colouring of both. Strokes update the intensity around the
//! cursor, recolour only that square, and patch the cache in place, so
//! [`Artwork::rgb`] is always a pure function of the current state.
//!
//! ```no_run
//! use fractalinator::{ArtConfig, Artwork};
//!
//! let config = ArtConfig::default().with_shape(320, 240).with_seed(7);
//! let mut art = Artwork::new(config)?;
//! let patch = art.paint_stroke(160, 120)?;
//! assert_eq!(patch.as_bytes().len(), 201 * 201 * 4);
//! let export = art.high_res(2)?;
//! assert_eq!(export.shape(), (640, 480));
//! # Ok::<(), fractalinator::ArtError>(())
//! ```

use crate::error::{ArtError, Result};
use crate::render::{upscale, FieldSynthesizer, FractalColorMapper, Patch, Raster};
use crate::types::{apply_weight, ArtConfig, BrushKernel, BrushMode, Grid, IntensityField, PixelRect, StrokeOp, UnitField};

/// A noise-seeded multibrot image that can be painted on.
#[derive(Debug, Clone)]
pub struct Artwork {
    config: ArtConfig,
    seed: u64,
    unit: UnitField,
    intensity: IntensityField,
    kernel: BrushKernel,
    mode: BrushMode,
    mapper: FractalColorMapper,
    raster: Raster,
}

impl Artwork {
    /// Build an unpainted artwork.
    pub fn new(config: ArtConfig) -> Result<Self> {
        config.validate()?;
        let intensity = Grid::filled(config.width(), config.height(), 0.0);
        Self::build(config, intensity)
    }

    /// Build an artwork over previously painted intensity.
    pub fn with_intensity(config: ArtConfig, intensity: IntensityField) -> Result<Self> {
        config.validate()?;
        if intensity.shape() != config.shape {
            return Err(ArtError::ShapeMismatch {
                expected: config.shape,
                found: intensity.shape(),
            });
        }
        if let Some(bad) = intensity.as_slice().iter().find(|v| !(v.is_finite() && **v >= 0.0)) {
            return Err(ArtError::config(format!(
                "intensity values must be finite and non-negative, found {}",
                bad
            )));
        }
        Self::build(config, intensity)
    }

    fn build(mut config: ArtConfig, intensity: IntensityField) -> Result<Self> {
        let synth = FieldSynthesizer::from_config(&config)?;
        // keep the drawn seed so exports and rebuilds reproduce this field
        config.noise_seed = Some(synth.seed());

        let unit = synth.synthesize(config.shape)?;
        let mapper = FractalColorMapper::from_config(&config)?;
        let raster = mapper.colorize(&unit, &intensity);

        Ok(Self {
            kernel: BrushKernel::new(config.brush_radius, config.brush_strength),
            seed: synth.seed(),
            config,
            unit,
            intensity,
            mode: BrushMode::default(),
            mapper,
            raster,
        })
    }

    /// Rebuild under a new config.
    ///
    /// Painted intensity carries over when the shape is unchanged; otherwise
    /// the new artwork starts unpainted. The brush mode always resets to
    /// drawing.
    pub fn reconfigure(self, config: ArtConfig) -> Result<Self> {
        if config.shape == self.config.shape {
            Self::with_intensity(config, self.intensity)
        } else {
            Self::new(config)
        }
    }

    /// The current image.
    pub fn rgb(&self) -> &Raster {
        &self.raster
    }

    /// Paint (or erase) at `(x, y)` and return the recoloured square.
    ///
    /// The patch is `2r+1` pixels square, centred on the stroke. Its pixels
    /// beyond the canvas are transparent.
    pub fn paint_stroke(&mut self, x: usize, y: usize) -> Result<Patch> {
        let (width, height) = self.config.shape;
        if x >= width || y >= height {
            return Err(ArtError::OutOfBounds { x, y, width, height });
        }

        let rect = PixelRect::centered(x, y, self.kernel.radius());
        for (ly, gy) in rect.rows() {
            let Some(gy) = gy.filter(|&gy| gy < height) else {
                continue;
            };
            for (lx, gx) in rect.columns() {
                let Some(gx) = gx.filter(|&gx| gx < width) else {
                    continue;
                };
                let cell = &mut self.intensity[(gx, gy)];
                *cell = apply_weight(*cell, self.kernel.weight(lx, ly), self.mode);
            }
        }

        let patch = Patch {
            rect,
            raster: self.mapper.colorize_rect(&self.unit, &self.intensity, rect),
        };
        self.raster.blit(&patch);
        Ok(patch)
    }

    /// Replay recorded stroke ops. Returns the number of points painted.
    pub fn replay(&mut self, ops: &[StrokeOp]) -> Result<usize> {
        let mut painted = 0;
        for op in ops {
            match op {
                StrokeOp::Draw => self.mode = BrushMode::Draw,
                StrokeOp::Erase => self.mode = BrushMode::Erase,
                _ => {
                    for (x, y) in op.points() {
                        self.paint_stroke(x, y)?;
                        painted += 1;
                    }
                }
            }
        }
        Ok(painted)
    }

    /// Switch between drawing and erasing.
    pub fn toggle_draw_erase(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn erasing(&self) -> bool {
        self.mode == BrushMode::Erase
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    /// Render at `sf` times the base resolution.
    ///
    /// The unit field and the painted intensity are both bilinearly
    /// upsampled, so the export shows the same picture in more detail.
    /// `high_res(1)` is identical to [`rgb`](Artwork::rgb).
    pub fn high_res(&self, sf: usize) -> Result<Raster> {
        match sf {
            0 => Err(ArtError::config("scale factor must be at least 1")),
            1 => Ok(self.raster.clone()),
            _ => {
                let unit = upscale(self.unit.clone(), sf)?;
                let intensity = self.intensity.upsample(sf);
                Ok(self.mapper.colorize(&unit, &intensity))
            }
        }
    }

    pub fn intensity(&self) -> &IntensityField {
        &self.intensity
    }

    /// Take the painted intensity, e.g. to carry into a rebuilt artwork.
    pub fn into_intensity(self) -> IntensityField {
        self.intensity
    }

    pub fn unit_field(&self) -> &UnitField {
        &self.unit
    }

    /// The config this artwork was built from, with its seed filled in.
    pub fn config(&self) -> &ArtConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Canvas size as `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        self.config.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    fn small() -> ArtConfig {
        ArtConfig {
            shape: (32, 24),
            noise_seed: Some(11),
            noise_sig: 3.0,
            brush_radius: 4,
            brush_strength: 20.0,
            max_it: 20,
            ..Default::default()
        }
    }

    fn from_scratch(art: &Artwork) -> Raster {
        FractalColorMapper::from_config(art.config())
            .unwrap()
            .colorize(art.unit_field(), art.intensity())
    }

    #[test]
    fn test_construction_is_deterministic() {
        let a = Artwork::new(small()).unwrap();
        let b = Artwork::new(small()).unwrap();
        assert_eq!(a.rgb(), b.rgb());
        assert_eq!(a.rgb().as_bytes().len(), 32 * 24 * 4);
    }

    #[test]
    fn test_rgb_is_idempotent() {
        let art = Artwork::new(small()).unwrap();
        let first = art.rgb().clone();
        assert_eq!(art.rgb(), &first);
    }

    #[test]
    fn test_random_seed_is_recorded() {
        let config = ArtConfig {
            noise_seed: None,
            ..small()
        };
        let art = Artwork::new(config).unwrap();
        assert_eq!(art.config().noise_seed, Some(art.seed()));

        let again = Artwork::new(art.config().clone()).unwrap();
        assert_eq!(again.rgb(), art.rgb());
    }

    #[test]
    fn test_invalid_config_fails() {
        assert!(Artwork::new(small().with_shape(0, 5)).is_err());
        let err = Artwork::new(small().with_colormap("nope")).unwrap_err();
        assert!(matches!(err, ArtError::UnknownColormap { .. }));
    }

    #[test]
    fn test_patch_matches_full_colouring() {
        let mut art = Artwork::new(small()).unwrap();
        let patch = art.paint_stroke(10, 12).unwrap();

        assert_eq!(patch.rect, PixelRect::new(6, 8, 9, 9));
        assert_eq!(patch.as_bytes().len(), 9 * 9 * 4);

        let full = from_scratch(&art);
        assert_eq!(patch.raster, full.extract(patch.rect));
        assert_eq!(art.rgb(), &full);
    }

    #[test]
    fn test_edge_patch_is_transparent_off_canvas() {
        let mut art = Artwork::new(small()).unwrap();
        let patch = art.paint_stroke(0, 23).unwrap();

        assert_eq!(patch.rect, PixelRect::new(-4, 19, 9, 9));
        assert_eq!(patch.raster.pixel(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(patch.raster.pixel(8, 8), Some(Colour::TRANSPARENT));
        assert!(!patch.raster.pixel(4, 4).unwrap().is_transparent());
        assert_eq!(patch.raster, from_scratch(&art).extract(patch.rect));
    }

    #[test]
    fn test_stroke_adds_intensity_in_disc() {
        let mut art = Artwork::new(small()).unwrap();
        art.paint_stroke(16, 12).unwrap();

        assert_eq!(art.intensity()[(16, 12)], 20.0);
        assert_eq!(art.intensity()[(17, 12)], 10.0);
        // corner of the square lies outside the disc
        assert_eq!(art.intensity()[(20, 16)], 0.0);
        assert_eq!(art.intensity()[(25, 12)], 0.0);
    }

    #[test]
    fn test_erase_inverts_paint() {
        let mut art = Artwork::new(small()).unwrap();
        let before = art.rgb().clone();

        art.paint_stroke(5, 5).unwrap();
        art.paint_stroke(7, 6).unwrap();
        art.toggle_draw_erase();
        assert!(art.erasing());
        art.paint_stroke(7, 6).unwrap();
        art.paint_stroke(5, 5).unwrap();

        assert!(art.intensity().as_slice().iter().all(|v| v.abs() < 1e-9));
        assert_eq!(art.rgb(), &before);
    }

    #[test]
    fn test_erase_clamps_at_zero() {
        let mut art = Artwork::new(small()).unwrap();
        art.toggle_draw_erase();
        art.paint_stroke(3, 3).unwrap();
        assert!(art.intensity().as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_toggle_twice_restores_drawing() {
        let mut art = Artwork::new(small()).unwrap();
        assert!(!art.erasing());
        art.toggle_draw_erase();
        art.toggle_draw_erase();
        assert_eq!(art.mode(), BrushMode::Draw);
    }

    #[test]
    fn test_out_of_bounds_stroke_is_rejected() {
        let mut art = Artwork::new(small()).unwrap();
        let before = art.intensity().clone();

        let err = art.paint_stroke(32, 0).unwrap_err();
        assert!(matches!(err, ArtError::OutOfBounds { x: 32, y: 0, .. }));
        assert!(art.paint_stroke(0, 24).is_err());
        assert_eq!(art.intensity(), &before);
    }

    #[test]
    fn test_high_res_one_is_rgb() {
        let mut art = Artwork::new(small()).unwrap();
        art.paint_stroke(8, 8).unwrap();
        assert_eq!(&art.high_res(1).unwrap(), art.rgb());
    }

    #[test]
    fn test_high_res_doubles_and_keeps_state() {
        let mut art = Artwork::new(small()).unwrap();
        art.paint_stroke(8, 8).unwrap();
        let before = art.rgb().clone();

        let big = art.high_res(2).unwrap();
        assert_eq!(big.shape(), (64, 48));
        assert_eq!(big.as_bytes().len(), 64 * 48 * 4);
        assert_eq!(art.rgb(), &before);
        assert_eq!(art.high_res(2).unwrap(), big);
    }

    #[test]
    fn test_high_res_zero_fails() {
        let art = Artwork::new(small()).unwrap();
        assert!(matches!(art.high_res(0), Err(ArtError::Config { .. })));
    }

    #[test]
    fn test_single_pixel_zero_radius() {
        let config = ArtConfig {
            shape: (1, 1),
            brush_radius: 0,
            noise_seed: Some(0),
            ..Default::default()
        };
        let mut art = Artwork::new(config).unwrap();
        let patch = art.paint_stroke(0, 0).unwrap();

        assert_eq!(patch.as_bytes().len(), 4);
        assert_eq!(art.intensity()[(0, 0)], 50.0);
        assert_eq!(art.rgb().as_bytes(), patch.as_bytes());
    }

    #[test]
    fn test_single_iteration_terminates() {
        let config = ArtConfig {
            max_it: 1,
            ..small()
        };
        let mut art = Artwork::new(config).unwrap();
        art.paint_stroke(4, 4).unwrap();
        assert_eq!(art.rgb().as_bytes().len(), 32 * 24 * 4);
    }

    #[test]
    fn test_with_intensity_shape_mismatch() {
        let err = Artwork::with_intensity(small(), Grid::filled(4, 4, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            ArtError::ShapeMismatch {
                expected: (32, 24),
                found: (4, 4)
            }
        ));
    }

    #[test]
    fn test_with_intensity_rejects_negative() {
        let mut field = Grid::filled(32, 24, 0.0);
        field[(1, 1)] = -1.0;
        assert!(Artwork::with_intensity(small(), field).is_err());
    }

    #[test]
    fn test_reconfigure_carries_intensity() {
        let mut art = Artwork::new(small()).unwrap();
        art.paint_stroke(12, 12).unwrap();
        let painted = art.intensity().clone();

        let art = art.reconfigure(small().with_colormap("viridis")).unwrap();
        assert_eq!(art.intensity(), &painted);
        assert_eq!(art.config().cmap_name, "viridis");

        let art = art.reconfigure(small().with_shape(16, 16)).unwrap();
        assert_eq!(art.shape(), (16, 16));
        assert!(art.intensity().as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_painted_field_can_be_reapplied() {
        let mut art = Artwork::new(small().with_brush(2, 5.0)).unwrap();
        for _ in 0..3 {
            art.paint_stroke(8, 8).unwrap();
        }
        assert!(art.intensity().as_slice().iter().all(|&v| v.is_finite() && v >= 0.0));

        let art = art.reconfigure(small().with_brush(2, 5.0).with_colormap("viridis")).unwrap();
        assert_eq!(art.intensity()[(8, 8)], 15.0);
    }

    #[test]
    fn test_negative_strength_is_rejected() {
        let err = Artwork::new(small().with_brush(2, -5.0)).unwrap_err();
        assert!(matches!(err, ArtError::Config { .. }));
    }

    #[test]
    fn test_replay_switches_modes() {
        let mut art = Artwork::new(small()).unwrap();
        let ops = [
            StrokeOp::Line { from: (2, 2), to: (6, 2) },
            StrokeOp::Erase,
            StrokeOp::Point { x: 4, y: 2 },
        ];
        assert_eq!(art.replay(&ops).unwrap(), 6);
        assert!(art.erasing());
        assert_eq!(art.rgb(), &from_scratch(&art));
    }

    #[test]
    fn test_jet_example() {
        let config = ArtConfig {
            shape: (64, 64),
            cmap_name: "jet".to_string(),
            noise_seed: Some(1234),
            ..Default::default()
        };
        let a = Artwork::new(config.clone()).unwrap();
        let b = Artwork::new(config).unwrap();
        assert_eq!(a.rgb().as_bytes().len(), 64 * 64 * 4);
        assert_eq!(a.rgb(), b.rgb());
    }
}
