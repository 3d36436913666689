//! Rendering pipeline.
//!
//! Noise synthesis, escape-time colouring and raster output. The
//! [`Artwork`](crate::Artwork) façade wires these together.

mod escape;
mod noise;
mod png;
mod raster;

pub use escape::{colorize, FractalColorMapper};
pub use noise::{gaussian_kernel, resolve_seed, smooth, synthesize, upscale, white_noise, FieldSynthesizer};
pub use png::{encode_png, write_png};
pub use raster::{Patch, Raster, CHANNELS};
