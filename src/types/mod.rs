//! Core domain types for fractalinator.
//!
//! - `ArtConfig` - generation parameters
//! - `Grid` / `IntensityField` / `UnitField` - per-pixel layers
//! - `Colormap` - named colour lookup tables
//! - `BrushKernel` / `BrushMode` - stroke shape and draw/erase state
//! - `Session` - a definition document with its strokes

mod brush;
mod colormap;
mod colour;
mod config;
mod field;
mod session;

pub use brush::{apply_weight, BrushKernel, BrushMode};
pub use colormap::{Colormap, LUT_SIZE};
pub use colour::Colour;
pub use config::ArtConfig;
pub use field::{Grid, IntensityField, PixelRect, UnitField};
pub use session::{line_points, Session, StrokeOp};
