//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use palette::{Mix, Srgb};

use crate::error::{ArtError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour. Used for patch pixels off the canvas.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black. Interior (non-escaping) pixels are painted with it.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let digits: Vec<u8> = hex
            .chars()
            .map(parse_hex_digit)
            .collect::<Result<_>>()?;

        match *digits.as_slice() {
            [r, g, b] => Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            _ => Err(ArtError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            }),
        }
    }

    /// Build an opaque colour from channel values in `0.0..=1.0`.
    pub fn from_unit_rgb(rgb: [f32; 3]) -> Self {
        let c: Srgb<u8> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
        Self::rgb(c.red, c.green, c.blue)
    }

    /// Interpolate towards `other` in sRGB space. Alpha is taken from `self`.
    pub fn mix(self, other: Colour, t: f32) -> Colour {
        let a: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        let b: Srgb<f32> = Srgb::new(other.r, other.g, other.b).into_format();
        let mixed: Srgb<u8> = a.mix(b, t.clamp(0.0, 1.0)).into_format();
        Colour::new(mixed.red, mixed.green, mixed.blue, self.a)
    }

    /// Convert to an RGBA byte array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl FromStr for Colour {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ArtError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}
