//! Artwork configuration.
//!
//! An [`ArtConfig`] is the full, immutable set of generation parameters.
//! Missing keys take the defaults below, so a definition file only needs to
//! list what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};
use crate::validation::ValidationResult;

use super::Colormap;

/// Generation parameters for an [`Artwork`](crate::Artwork).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtConfig {
    /// Escape threshold. Values near or below 2 let the noise field show
    /// through in the background.
    pub bailout_radius: f64,

    /// Intensity added at the centre of a stroke. Larger values give
    /// thicker strokes.
    pub brush_strength: f64,

    /// Stroke reach in pixels. Patches are `2r+1` pixels square.
    pub brush_radius: usize,

    /// Colormap name, optionally with an `_r` suffix.
    pub cmap_name: String,

    /// Escape-time distance over which the colormap repeats once.
    pub cmap_period: f64,

    /// Maximum iteration count.
    pub max_it: u32,

    /// Seed for reproducible noise. Drawn at random when absent.
    pub noise_seed: Option<u64>,

    /// Gaussian smoothing of the noise in pixels. Smaller values give more,
    /// smaller features.
    pub noise_sig: f64,

    /// Multibrot exponent.
    pub power: f64,

    /// Canvas size as `(width, height)` in pixels.
    pub shape: (usize, usize),
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            bailout_radius: 3.0,
            brush_strength: 50.0,
            brush_radius: 100,
            cmap_name: "gray_r".to_string(),
            cmap_period: 4.0,
            max_it: 30,
            noise_seed: None,
            noise_sig: 26.0,
            power: 3.0,
            shape: (720, 576),
        }
    }
}

impl ArtConfig {
    /// Load a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ArtError::Parse {
            message: format!("Invalid artwork config: {}", e),
            help: Some("Check the YAML syntax and field names".to_string()),
        })
    }

    /// Build from a YAML mapping (e.g. document frontmatter).
    pub fn from_yaml(value: serde_yaml::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value).map_err(|e| ArtError::Parse {
            message: format!("Invalid artwork config: {}", e),
            help: Some("Check the field names and value types".to_string()),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ArtError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    pub fn width(&self) -> usize {
        self.shape.0
    }

    pub fn height(&self) -> usize {
        self.shape.1
    }

    pub fn with_shape(mut self, width: usize, height: usize) -> Self {
        self.shape = (width, height);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.noise_seed = Some(seed);
        self
    }

    pub fn with_colormap(mut self, name: impl Into<String>) -> Self {
        self.cmap_name = name.into();
        self
    }

    pub fn with_brush(mut self, radius: usize, strength: f64) -> Self {
        self.brush_radius = radius;
        self.brush_strength = strength;
        self
    }

    /// Collect every problem with this configuration.
    pub fn check(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        let (w, h) = self.shape;
        if w == 0 || h == 0 {
            result.error(
                "fractalinator::config::shape",
                format!("shape must be at least 1x1, got {}x{}", w, h),
            );
        }
        if !(self.bailout_radius.is_finite() && self.bailout_radius > 0.0) {
            result.error(
                "fractalinator::config::bailout-radius",
                format!("bailout_radius must be a positive number, got {}", self.bailout_radius),
            );
        }
        if self.max_it == 0 {
            result.error("fractalinator::config::max-it", "max_it must be at least 1");
        }
        if !(self.power.is_finite() && self.power > 0.0) {
            result.error(
                "fractalinator::config::power",
                format!("power must be a positive number, got {}", self.power),
            );
        }
        if !(self.noise_sig.is_finite() && self.noise_sig >= 0.0) {
            result.error(
                "fractalinator::config::noise-sig",
                format!("noise_sig must be zero or positive, got {}", self.noise_sig),
            );
        }
        if !(self.cmap_period.is_finite() && self.cmap_period > 0.0) {
            result.error(
                "fractalinator::config::cmap-period",
                format!("cmap_period must be a positive number, got {}", self.cmap_period),
            );
        }
        if !(self.brush_strength.is_finite() && self.brush_strength > 0.0) {
            result.error(
                "fractalinator::config::brush-strength",
                format!("brush_strength must be a positive number, got {}", self.brush_strength),
            );
        }
        if w > 0 && h > 0 && self.brush_radius > w.max(h) {
            result.warning(
                "fractalinator::config::brush-radius",
                format!(
                    "brush_radius {} exceeds the canvas; every stroke recolours the whole image",
                    self.brush_radius
                ),
            );
        }
        if !Colormap::exists(&self.cmap_name) {
            result.error(
                "fractalinator::config::cmap-name",
                format!("unknown colormap '{}'", self.cmap_name),
            );
        }

        result
    }

    /// Fail on the first error-level problem.
    pub fn validate(&self) -> Result<()> {
        if !Colormap::exists(&self.cmap_name) {
            // resolve for the "did you mean" help
            Colormap::builtin(&self.cmap_name)?;
        }

        let result = self.check();
        let first = result.errors().next().map(|d| ArtError::Config {
            message: d.message.clone(),
            help: d.help.clone(),
        });
        first.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = ArtConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
cmap_name: jet
max_it: 50
noise_seed: 1
shape: [64, 32]
"#;
        let config = ArtConfig::parse(yaml).unwrap();

        assert_eq!(config.cmap_name, "jet");
        assert_eq!(config.max_it, 50);
        assert_eq!(config.noise_seed, Some(1));
        assert_eq!(config.shape, (64, 32));
        // untouched keys keep defaults
        assert_eq!(config.bailout_radius, 3.0);
        assert_eq!(config.brush_radius, 100);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(ArtConfig::parse("").unwrap(), ArtConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = ArtConfig::parse("bailout: 2.0").unwrap_err();
        assert!(matches!(err, ArtError::Parse { .. }));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ArtConfig::default().with_seed(7).with_colormap("viridis");
        let yaml = config.to_yaml().unwrap();
        assert_eq!(ArtConfig::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_zero_shape_rejected() {
        let config = ArtConfig::default().with_shape(0, 10);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ArtError::Config { .. }));
    }

    #[test]
    fn test_negative_sigma_rejected() {
        let config = ArtConfig {
            noise_sig: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = ArtConfig {
            max_it: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_bailout_rejected() {
        let config = ArtConfig {
            bailout_radius: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_colormap_rejected() {
        let config = ArtConfig::default().with_colormap("nope");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ArtError::UnknownColormap { .. }));
    }

    #[test]
    fn test_check_collects_everything() {
        let config = ArtConfig {
            max_it: 0,
            cmap_period: 0.0,
            cmap_name: "nope".to_string(),
            brush_strength: 0.0,
            ..Default::default()
        };
        let result = config.check();

        assert_eq!(result.error_count(), 4);
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_non_positive_strength_rejected() {
        for strength in [0.0, -5.0, f64::INFINITY] {
            let config = ArtConfig::default().with_brush(2, strength);
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ArtError::Config { .. }), "{}", strength);
        }
    }
}
