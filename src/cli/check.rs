//! Check command: validate session files without rendering.

use std::path::PathBuf;

use clap::Args;

use crate::error::{ArtError, Result};
use crate::output::{plural, Printer};
use crate::types::Session;
use crate::validation::{print_diagnostics, validate_sessions, ValidationResult};

/// Validate session files without rendering
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Session files or directories (default: the current project)
    pub files: Vec<PathBuf>,

    /// Export scale to check output size against
    #[arg(long)]
    pub scale: Option<usize>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<ValidationResult> {
    let discovery = super::discover_inputs(&args.files)?;
    let loaded = discovery.load()?;
    printer.status(
        "Checking",
        &format!(
            "{} in {}",
            plural(loaded.len(), "artwork", "artworks"),
            plural(discovery.scan.total(), "file", "files")
        ),
    );

    let sessions: Vec<Session> = loaded.into_iter().map(|l| l.session).collect();
    let result = validate_sessions(&sessions, args.scale, discovery.manifest.effective_scale());
    print_diagnostics(&result, printer);

    if result.has_errors() || (args.strict && result.has_warnings()) {
        return Err(ArtError::Config {
            message: format!(
                "validation failed with {} and {}",
                plural(result.error_count(), "error", "errors"),
                plural(result.warning_count(), "warning", "warnings")
            ),
            help: None,
        });
    }

    Ok(result)
}
