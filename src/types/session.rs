//! Session type: an artwork definition plus the strokes painted on it.

use super::ArtConfig;

/// One instruction from a ```` ```strokes ```` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOp {
    /// Paint (or erase) at a single point.
    Point { x: usize, y: usize },
    /// Paint every integer point along a segment, as a mouse drag would.
    Line {
        from: (usize, usize),
        to: (usize, usize),
    },
    /// Switch to drawing.
    Draw,
    /// Switch to erasing.
    Erase,
}

impl StrokeOp {
    /// Points this op paints, in order. Mode switches paint nothing.
    pub fn points(&self) -> Vec<(usize, usize)> {
        match *self {
            StrokeOp::Point { x, y } => vec![(x, y)],
            StrokeOp::Line { from, to } => line_points(from, to),
            StrokeOp::Draw | StrokeOp::Erase => vec![],
        }
    }
}

/// A named artwork definition loaded from a `.art.md` document.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub name: String,
    pub config: ArtConfig,
    pub strokes: Vec<StrokeOp>,
    /// Export scale from frontmatter; the CLI flag overrides it.
    pub scale: Option<usize>,
}

impl Session {
    pub fn new(name: impl Into<String>, config: ArtConfig) -> Self {
        Self {
            name: name.into(),
            config,
            strokes: Vec::new(),
            scale: None,
        }
    }

    pub fn with_strokes(mut self, strokes: Vec<StrokeOp>) -> Self {
        self.strokes = strokes;
        self
    }

    /// Total number of stroke points (mode switches excluded).
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|s| s.points().len()).sum()
    }
}

/// Integer points on the segment between two pixels (Bresenham).
pub fn line_points(from: (usize, usize), to: (usize, usize)) -> Vec<(usize, usize)> {
    let (mut x, mut y) = (from.0 as i64, from.1 as i64);
    let (x1, y1) = (to.0 as i64, to.1 as i64);

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        points.push((x as usize, y as usize));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}
