//! Two-dimensional grids and pixel rectangles.
//!
//! Every per-pixel layer of an artwork (unit noise, painted intensity) is a
//! [`Grid`] stored row-major. Shapes are always `(width, height)`.

use std::ops::{Add, Index, IndexMut, Mul};

use num_complex::Complex64;

use crate::error::{ArtError, Result};

/// A dense row-major 2D grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Painted intensity, one value per pixel. Never negative.
pub type IntensityField = Grid<f64>;

/// Complex noise of unit modulus, one value per pixel.
pub type UnitField = Grid<Complex64>;

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Create a grid from a function of `(x, y)`, called in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != width * height {
            return Err(ArtError::config(format!(
                "grid of {}x{} needs {} cells, got {}",
                width,
                height,
                width * height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get a cell, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Row-major cell slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate the cells of row `y`.
    pub fn row(&self, y: usize) -> &[T] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Apply `f` to every cell, producing a new grid of the same shape.
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Extract the cells of `rect`, with `outside` for cells beyond the grid.
    pub fn extract(&self, rect: PixelRect, outside: T) -> Grid<T> {
        let mut out = Grid::filled(rect.width, rect.height, outside);
        for (ly, gy) in rect.rows() {
            for (lx, gx) in rect.columns() {
                if let (Some(gx), Some(gy)) = (gx, gy) {
                    if let Some(v) = self.get(gx, gy) {
                        out[(lx, ly)] = v;
                    }
                }
            }
        }
        out
    }
}

impl<T> Grid<T>
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    /// Bilinearly upsample by an integer factor.
    ///
    /// Output cell `(X, Y)` samples the source at `(X / sf, Y / sf)`; samples
    /// past the last row or column clamp to the edge. `sf <= 1` returns an
    /// unchanged copy.
    pub fn upsample(&self, sf: usize) -> Grid<T> {
        if sf <= 1 {
            return self.clone();
        }

        let width = self.width * sf;
        let height = self.height * sf;
        let mut data = Vec::with_capacity(width * height);

        for oy in 0..height {
            let y0 = oy / sf;
            let y1 = (y0 + 1).min(self.height - 1);
            let fy = (oy % sf) as f64 / sf as f64;

            for ox in 0..width {
                let x0 = ox / sf;
                let x1 = (x0 + 1).min(self.width - 1);
                let fx = (ox % sf) as f64 / sf as f64;

                let v00 = self[(x0, y0)];
                let v10 = self[(x1, y0)];
                let v01 = self[(x0, y1)];
                let v11 = self[(x1, y1)];

                let top = v00 * (1.0 - fx) + v10 * fx;
                let bottom = v01 * (1.0 - fx) + v11 * fx;
                data.push(top * (1.0 - fy) + bottom * fy);
            }
        }

        Grid {
            width,
            height,
            data,
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.data[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        &mut self.data[y * self.width + x]
    }
}

/// A rectangle of pixels whose origin may lie off-canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl PixelRect {
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The `(2r+1)`-sided square centred on `(cx, cy)`.
    pub fn centered(cx: usize, cy: usize, radius: usize) -> Self {
        let side = 2 * radius + 1;
        Self::new(cx as i64 - radius as i64, cy as i64 - radius as i64, side, side)
    }

    /// The whole of a `width x height` canvas.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Global column for each local column, `None` when left of the canvas.
    pub fn columns(&self) -> impl Iterator<Item = (usize, Option<usize>)> {
        let x = self.x;
        (0..self.width).map(move |lx| (lx, to_index(x + lx as i64)))
    }

    /// Global row for each local row, `None` when above the canvas.
    pub fn rows(&self) -> impl Iterator<Item = (usize, Option<usize>)> {
        let y = self.y;
        (0..self.height).map(move |ly| (ly, to_index(y + ly as i64)))
    }

    /// Intersection with a `width x height` canvas as half-open global
    /// ranges `(x0..x1, y0..y1)`, or `None` if they do not overlap.
    pub fn clip(&self, width: usize, height: usize) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = (self.x + self.width as i64).min(width as i64);
        let y1 = (self.y + self.height as i64).min(height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize..x1 as usize, y0 as usize..y1 as usize))
    }
}

fn to_index(v: i64) -> Option<usize> {
    usize::try_from(v).ok()
}
