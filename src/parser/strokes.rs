//! Stroke script parsing.
//!
//! One instruction per line:
//!
//! ```text
//! # comment
//! 120,80          paint at a point (also "120 80")
//! line 0,0 40,20  paint along a segment
//! erase           switch to erasing
//! draw            switch back to drawing
//! ```

use crate::error::{ArtError, Result};
use crate::types::StrokeOp;

/// Parse a stroke script. `first_line` is the 1-based file line of the
/// script's first line, used in error messages.
pub fn parse_strokes(source: &str, first_line: usize) -> Result<Vec<StrokeOp>> {
    let mut ops = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let line_no = first_line + i;
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        }
        .trim();

        if line.is_empty() {
            continue;
        }

        let op = match line {
            "draw" => StrokeOp::Draw,
            "erase" => StrokeOp::Erase,
            _ => match line.strip_prefix("line") {
                Some(rest) if rest.starts_with(char::is_whitespace) => parse_line(rest, line_no)?,
                _ => {
                    let (x, y) = parse_point(line, line_no)?;
                    StrokeOp::Point { x, y }
                }
            },
        };
        ops.push(op);
    }

    Ok(ops)
}

fn parse_line(rest: &str, line_no: usize) -> Result<StrokeOp> {
    let points: Vec<&str> = rest.split_whitespace().collect();
    match points.as_slice() {
        [from, to] => Ok(StrokeOp::Line {
            from: parse_point(from, line_no)?,
            to: parse_point(to, line_no)?,
        }),
        _ => Err(stroke_error(
            line_no,
            format!("expected 'line x0,y0 x1,y1', got 'line{}'", rest),
        )),
    }
}

fn parse_point(text: &str, line_no: usize) -> Result<(usize, usize)> {
    let parts: Vec<&str> = if text.contains(',') {
        text.split(',').map(str::trim).collect()
    } else {
        text.split_whitespace().collect()
    };

    match parts.as_slice() {
        [x, y] => Ok((parse_coord(x, line_no)?, parse_coord(y, line_no)?)),
        _ => Err(stroke_error(line_no, format!("expected 'x,y', got '{}'", text))),
    }
}

fn parse_coord(text: &str, line_no: usize) -> Result<usize> {
    text.parse().map_err(|_| {
        stroke_error(
            line_no,
            format!("'{}' is not a pixel coordinate", text),
        )
    })
}

fn stroke_error(line_no: usize, message: String) -> ArtError {
    ArtError::Parse {
        message: format!("line {}: {}", line_no, message),
        help: Some("Stroke lines are 'x,y', 'line x0,y0 x1,y1', 'draw' or 'erase'".to_string()),
    }
}
