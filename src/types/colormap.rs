//! Named colormaps.
//!
//! Each builtin colormap is sampled into a 256-entry lookup table, the same
//! resolution matplotlib uses, so lookups are a single index. Appending `_r`
//! to any name reverses the table.

use crate::error::{ArtError, Result};

use super::Colour;

/// Number of entries in a sampled colormap.
pub const LUT_SIZE: usize = 256;

/// How a builtin colormap is defined.
enum Definition {
    /// Colours at increasing positions in `0.0..=1.0`, interpolated in sRGB.
    Stops(&'static [(f32, &'static str)]),

    /// Independent piecewise-linear curves per channel: `(position, value)`.
    Segments {
        red: &'static [(f32, f32)],
        green: &'static [(f32, f32)],
        blue: &'static [(f32, f32)],
    },
}

const RAMP_UP: &[(f32, f32)] = &[(0.0, 0.0), (1.0, 1.0)];
const RAMP_DOWN: &[(f32, f32)] = &[(0.0, 1.0), (1.0, 0.0)];
const FULL: &[(f32, f32)] = &[(0.0, 1.0), (1.0, 1.0)];
const NONE: &[(f32, f32)] = &[(0.0, 0.0), (1.0, 0.0)];

const BUILTINS: &[(&str, Definition)] = &[
    (
        "gray",
        Definition::Segments {
            red: RAMP_UP,
            green: RAMP_UP,
            blue: RAMP_UP,
        },
    ),
    (
        "binary",
        Definition::Segments {
            red: RAMP_DOWN,
            green: RAMP_DOWN,
            blue: RAMP_DOWN,
        },
    ),
    (
        "jet",
        Definition::Segments {
            red: &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
            green: &[(0.0, 0.0), (0.125, 0.0), (0.375, 1.0), (0.64, 1.0), (0.91, 0.0), (1.0, 0.0)],
            blue: &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
        },
    ),
    (
        "hot",
        Definition::Segments {
            red: &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
            green: &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
            blue: &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
        },
    ),
    (
        "cool",
        Definition::Segments {
            red: RAMP_UP,
            green: RAMP_DOWN,
            blue: FULL,
        },
    ),
    (
        "spring",
        Definition::Segments {
            red: FULL,
            green: RAMP_UP,
            blue: RAMP_DOWN,
        },
    ),
    (
        "summer",
        Definition::Segments {
            red: RAMP_UP,
            green: &[(0.0, 0.5), (1.0, 1.0)],
            blue: &[(0.0, 0.4), (1.0, 0.4)],
        },
    ),
    (
        "autumn",
        Definition::Segments {
            red: FULL,
            green: RAMP_UP,
            blue: NONE,
        },
    ),
    (
        "winter",
        Definition::Segments {
            red: NONE,
            green: RAMP_UP,
            blue: &[(0.0, 1.0), (1.0, 0.5)],
        },
    ),
    (
        "copper",
        Definition::Segments {
            red: &[(0.0, 0.0), (0.809524, 1.0), (1.0, 1.0)],
            green: &[(0.0, 0.0), (1.0, 0.7812)],
            blue: &[(0.0, 0.0), (1.0, 0.4975)],
        },
    ),
    (
        "bone",
        Definition::Segments {
            red: &[(0.0, 0.0), (0.746032, 0.652778), (1.0, 1.0)],
            green: &[(0.0, 0.0), (0.365079, 0.319444), (0.746032, 0.777778), (1.0, 1.0)],
            blue: &[(0.0, 0.0), (0.365079, 0.444444), (1.0, 1.0)],
        },
    ),
    (
        "hsv",
        Definition::Stops(&[
            (0.0, "#FF0000"),
            (1.0 / 6.0, "#FFFF00"),
            (2.0 / 6.0, "#00FF00"),
            (3.0 / 6.0, "#00FFFF"),
            (4.0 / 6.0, "#0000FF"),
            (5.0 / 6.0, "#FF00FF"),
            (1.0, "#FF0000"),
        ]),
    ),
    (
        "viridis",
        Definition::Stops(&[
            (0.0, "#440154"),
            (0.25, "#3B528B"),
            (0.5, "#21918C"),
            (0.75, "#5EC962"),
            (1.0, "#FDE725"),
        ]),
    ),
    (
        "plasma",
        Definition::Stops(&[
            (0.0, "#0D0887"),
            (0.25, "#7E03A8"),
            (0.5, "#CC4778"),
            (0.75, "#F89540"),
            (1.0, "#F0F921"),
        ]),
    ),
    (
        "inferno",
        Definition::Stops(&[
            (0.0, "#000004"),
            (0.2, "#420A68"),
            (0.4, "#932667"),
            (0.6, "#DD513A"),
            (0.8, "#FCA50A"),
            (1.0, "#FCFFA4"),
        ]),
    ),
    (
        "magma",
        Definition::Stops(&[
            (0.0, "#000004"),
            (0.2, "#3B0F70"),
            (0.4, "#8C2981"),
            (0.6, "#DE4968"),
            (0.8, "#FE9F6D"),
            (1.0, "#FCFDBF"),
        ]),
    ),
    (
        "twilight",
        Definition::Stops(&[
            (0.0, "#E2D9E2"),
            (0.25, "#6074BE"),
            (0.5, "#2F1436"),
            (0.75, "#AE5243"),
            (1.0, "#E2D9E2"),
        ]),
    ),
    (
        "coolwarm",
        Definition::Stops(&[(0.0, "#3B4CC0"), (0.5, "#DDDDDD"), (1.0, "#B40426")]),
    ),
    (
        "rainbow",
        Definition::Stops(&[
            (0.0, "#FF0000"),
            (1.0 / 6.0, "#FF4500"),
            (2.0 / 6.0, "#FFFF00"),
            (3.0 / 6.0, "#00FF00"),
            (4.0 / 6.0, "#0000FF"),
            (5.0 / 6.0, "#3F0FB7"),
            (1.0, "#7F00FF"),
        ]),
    ),
    (
        "bluered",
        Definition::Stops(&[(0.0, "#0000FF"), (0.5, "#FF0000"), (1.0, "#0000FF")]),
    ),
    (
        "wolverine",
        Definition::Stops(&[(0.0, "#00274C"), (0.5, "#FFCB00"), (1.0, "#00274C")]),
    ),
    (
        "midnight",
        Definition::Stops(&[(0.0, "#000000"), (0.5, "#FF00FF"), (1.0, "#000000")]),
    ),
    (
        "valentine",
        Definition::Stops(&[(0.0, "#FFFFFF"), (0.5, "#FF00FF"), (1.0, "#FFFFFF")]),
    ),
    (
        "zebra",
        Definition::Stops(&[(0.0, "#000000"), (0.5, "#FFFFFF"), (1.0, "#000000")]),
    ),
];

/// A colormap sampled into a lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: String,
    lut: Vec<Colour>,
}

impl Colormap {
    /// Resolve a builtin colormap by name, honouring the `_r` suffix.
    pub fn builtin(name: &str) -> Result<Self> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };

        let definition = BUILTINS
            .iter()
            .find(|(n, _)| *n == base)
            .map(|(_, d)| d)
            .ok_or_else(|| unknown(name))?;

        let mut lut = sample(definition)?;
        if reversed {
            lut.reverse();
        }

        Ok(Self {
            name: name.to_string(),
            lut,
        })
    }

    /// Names of all builtin colormaps (without `_r` variants).
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTINS.iter().map(|(n, _)| *n)
    }

    /// Check whether a name resolves, without sampling it.
    pub fn exists(name: &str) -> bool {
        let base = name.strip_suffix("_r").unwrap_or(name);
        BUILTINS.iter().any(|(n, _)| *n == base)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Colour at `s` in `0.0..=1.0`. Values outside the range clamp.
    pub fn lookup(&self, s: f64) -> Colour {
        let idx = if s.is_nan() || s <= 0.0 {
            0
        } else {
            ((s * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1)
        };
        self.lut[idx]
    }

    /// The sampled lookup table.
    pub fn entries(&self) -> &[Colour] {
        &self.lut
    }
}

fn unknown(name: &str) -> ArtError {
    let base = name.strip_suffix("_r").unwrap_or(name);
    let prefix: String = base.chars().take(2).collect();
    let close: Vec<&str> = Colormap::names()
        .filter(|n| !prefix.is_empty() && (n.starts_with(&prefix) || n.contains(base)))
        .collect();

    let help = if close.is_empty() {
        "Run `fractalinator colormaps` to list available colormaps".to_string()
    } else {
        format!("Did you mean: {}?", close.join(", "))
    };

    ArtError::UnknownColormap {
        name: name.to_string(),
        help: Some(help),
    }
}

fn sample(definition: &Definition) -> Result<Vec<Colour>> {
    let positions = (0..LUT_SIZE).map(|i| i as f32 / (LUT_SIZE - 1) as f32);

    match definition {
        Definition::Segments { red, green, blue } => Ok(positions
            .map(|t| Colour::from_unit_rgb([curve(red, t), curve(green, t), curve(blue, t)]))
            .collect()),
        Definition::Stops(stops) => {
            let stops: Vec<(f32, Colour)> = stops
                .iter()
                .map(|(pos, hex)| Colour::from_hex(hex).map(|c| (*pos, c)))
                .collect::<Result<_>>()?;
            Ok(positions.map(|t| gradient(&stops, t)).collect())
        }
    }
}

/// Evaluate a piecewise-linear channel curve at `t`.
fn curve(points: &[(f32, f32)], t: f32) -> f32 {
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            if x1 <= x0 {
                return y1;
            }
            let f = ((t - x0) / (x1 - x0)).clamp(0.0, 1.0);
            return y0 + (y1 - y0) * f;
        }
    }
    points.last().map_or(0.0, |&(_, y)| y)
}

fn gradient(stops: &[(f32, Colour)], t: f32) -> Colour {
    for pair in stops.windows(2) {
        let (x0, c0) = pair[0];
        let (x1, c1) = pair[1];
        if t <= x1 {
            if x1 <= x0 {
                return c1;
            }
            return c0.mix(c1, (t - x0) / (x1 - x0));
        }
    }
    stops.last().map_or(Colour::BLACK, |&(_, c)| c)
}
