//! Validation for session files.
//!
//! Runs a suite of checks against loaded sessions and reports errors and
//! warnings. Used by `fractalinator check` and before every render.

mod checks;
mod diagnostic;

pub use checks::MAX_EXPORT_SIDE;
pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::types::Session;

/// Run all checks.
///
/// `scale_override` is the CLI `--scale`, if any; `default_scale` is the
/// manifest's, used for sessions without their own `scale`.
pub fn validate_sessions(sessions: &[Session], scale_override: Option<usize>, default_scale: usize) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_configs(sessions));
    result.merge(checks::check_duplicate_names(sessions));
    result.merge(checks::check_stroke_bounds(sessions));
    result.merge(checks::check_trailing_mode_switch(sessions));
    result.merge(checks::check_export_size(sessions, scale_override, default_scale));

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.is_error());
        let location = d.document.as_deref().map(|doc| format!(" {}", printer.cyan(doc))).unwrap_or_default();
        printer.line(&format!("{}[{}]{}: {}", label, d.code, location, d.message));
        if let Some(help) = &d.help {
            printer.line(&format!("  {} {}", printer.dim("help:"), help));
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if result.has_warnings() {
        printer.warning("Checked", &format!("passed with {}", warnings));
    } else {
        printer.success("Checked", "no problems found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArtConfig, StrokeOp};

    #[test]
    fn test_validate_clean_sessions() {
        let sessions = vec![Session::new("a", ArtConfig::default()).with_strokes(vec![StrokeOp::Point { x: 5, y: 5 }])];
        assert!(validate_sessions(&sessions, None, 1).is_ok());
    }

    #[test]
    fn test_validate_collects_across_checks() {
        let mut bad = Session::new("a", ArtConfig::default().with_shape(10, 10));
        bad.config.cmap_name = "nope".to_string();
        bad.strokes = vec![StrokeOp::Point { x: 50, y: 0 }, StrokeOp::Draw];
        let twin = Session::new("a", ArtConfig::default());

        let result = validate_sessions(&[bad, twin], None, 1);
        // colormap, duplicate name, stroke bounds
        assert_eq!(result.error_count(), 3);
        // brush radius larger than canvas, trailing mode switch
        assert_eq!(result.warning_count(), 2);
    }
}
