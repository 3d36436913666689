//! fractalinator - noise-seeded multibrot artwork
//!
//! A smooth complex noise field seeds a multibrot escape-time iteration;
//! the escape time is cycled through a colormap. Brush strokes raise (or
//! erase) a per-pixel intensity that pulls orbits inward, and only the
//! square under the brush is recoloured. Finished pieces export at any
//! integer multiple of the base resolution.
//!
//! The library never prints. The `fractalinator` binary adds session
//! files, validation, and PNG export on top of [`Artwork`].

pub mod artwork;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use artwork::Artwork;
pub use discovery::{discover, discover_paths, DiscoveryResult, LoadedSession, Manifest, ScanResult};
pub use error::{ArtError, Result};
pub use parser::{parse_session_file, parse_sessions};
pub use render::{encode_png, write_png, FieldSynthesizer, FractalColorMapper, Patch, Raster};
pub use types::{ArtConfig, BrushKernel, BrushMode, Colormap, Colour, Grid, IntensityField, PixelRect, Session, StrokeOp, UnitField};
pub use validation::{validate_sessions, Diagnostic, Severity, ValidationResult};
