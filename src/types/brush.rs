//! Brush kernel and drawing mode.
//!
//! A stroke adds (or, while erasing, removes) a radially decaying amount of
//! intensity around the cursor. The kernel is computed once per artwork.

use super::Grid;

/// Whether strokes add or remove intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushMode {
    #[default]
    Draw,
    Erase,
}

impl BrushMode {
    pub fn toggled(self) -> Self {
        match self {
            BrushMode::Draw => BrushMode::Erase,
            BrushMode::Erase => BrushMode::Draw,
        }
    }
}

/// Square `(2r+1)`-sided weight table centred on the stroke point.
///
/// Weight at offset `(dx, dy)` is `strength / (dx² + dy² + 1)` inside the disc
/// of radius `r` and zero outside it.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushKernel {
    radius: usize,
    weights: Grid<f64>,
}

impl BrushKernel {
    pub fn new(radius: usize, strength: f64) -> Self {
        let side = 2 * radius + 1;
        let r = radius as i64;
        let r2 = r * r;

        let mut weights = Grid::filled(side, side, 0.0);
        for ly in 0..side {
            let dy = ly as i64 - r;
            for lx in 0..side {
                let dx = lx as i64 - r;
                let d2 = dx * dx + dy * dy;
                if d2 <= r2 {
                    weights[(lx, ly)] = strength / (d2 as f64 + 1.0);
                }
            }
        }

        Self { radius, weights }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Side length of the kernel square.
    pub fn side(&self) -> usize {
        2 * self.radius + 1
    }

    /// Weight at local kernel coordinates.
    pub fn weight(&self, lx: usize, ly: usize) -> f64 {
        self.weights[(lx, ly)]
    }

    pub fn weights(&self) -> &Grid<f64> {
        &self.weights
    }
}

/// Apply one kernel weight to an intensity value.
///
/// The result stays finite and never drops below zero in either mode.
pub fn apply_weight(intensity: f64, weight: f64, mode: BrushMode) -> f64 {
    let next = match mode {
        BrushMode::Draw => intensity + weight,
        BrushMode::Erase => intensity - weight,
    };
    next.clamp(0.0, f64::MAX)
}
