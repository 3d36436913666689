//! Validation checks for loaded sessions.
//!
//! Each check takes the sessions and returns a `ValidationResult`.

use std::collections::HashMap;

use crate::types::{Session, StrokeOp};

use super::diagnostic::{Diagnostic, ValidationResult};

/// Largest export side in pixels before a warning is raised.
pub const MAX_EXPORT_SIDE: usize = 16_384;

/// Every config problem of every session.
pub fn check_configs(sessions: &[Session]) -> ValidationResult {
    let mut result = ValidationResult::new();
    for session in sessions {
        result.merge(session.config.check().for_document(&session.name));
    }
    result
}

/// Stroke points must lie on the canvas.
pub fn check_stroke_bounds(sessions: &[Session]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for session in sessions {
        let (width, height) = session.config.shape;
        for op in &session.strokes {
            let outside = op.points().into_iter().find(|&(x, y)| x >= width || y >= height);
            if let Some((x, y)) = outside {
                result.push(
                    Diagnostic::error(
                        "fractalinator::validate::stroke-bounds",
                        format!("stroke point ({}, {}) is outside the {}x{} canvas", x, y, width, height),
                    )
                    .with_help("Keep x below the width and y below the height")
                    .in_document(&session.name),
                );
            }
        }
    }

    result
}

/// Names must be unique; each one becomes an output file.
pub fn check_duplicate_names(sessions: &[Session]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for session in sessions {
        *seen.entry(session.name.as_str()).or_insert(0) += 1;
    }

    let mut duplicates: Vec<_> = seen.into_iter().filter(|&(_, n)| n > 1).collect();
    duplicates.sort();
    for (name, count) in duplicates {
        result.push(
            Diagnostic::error(
                "fractalinator::validate::duplicate-name",
                format!("name '{}' is used by {} artworks", name, count),
            )
            .with_help("Later renders would overwrite earlier ones; rename one of them"),
        );
    }

    result
}

/// A trailing `draw`/`erase` paints nothing.
pub fn check_trailing_mode_switch(sessions: &[Session]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for session in sessions {
        if let Some(StrokeOp::Draw | StrokeOp::Erase) = session.strokes.last() {
            result.push(
                Diagnostic::warning(
                    "fractalinator::validate::trailing-mode",
                    "strokes end with a mode switch that paints nothing",
                )
                .in_document(&session.name),
            );
        }
    }

    result
}

/// The export scale each session will render at must be at least 1, and
/// exports larger than [`MAX_EXPORT_SIDE`] on a side are probably mistakes.
///
/// Scale resolves as at render time: `scale_override`, then the session's
/// own `scale`, then `default_scale`.
pub fn check_export_size(sessions: &[Session], scale_override: Option<usize>, default_scale: usize) -> ValidationResult {
    let mut result = ValidationResult::new();

    for session in sessions {
        let scale = scale_override.or(session.scale).unwrap_or(default_scale);
        if scale == 0 {
            result.push(
                Diagnostic::error("fractalinator::validate::scale", "export scale must be at least 1")
                    .with_help("Set scale to 1 for the base resolution")
                    .in_document(&session.name),
            );
            continue;
        }

        let side = session.config.width().max(session.config.height()).saturating_mul(scale);
        if side > MAX_EXPORT_SIDE {
            result.push(
                Diagnostic::warning(
                    "fractalinator::validate::export-size",
                    format!("export at scale {} is {} pixels on its longest side", scale, side),
                )
                .with_help("Lower the scale or the base shape")
                .in_document(&session.name),
            );
        }
    }

    result
}
