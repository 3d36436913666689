//! Terminal status output for the fractalinator CLI.
//!
//! Status lines go to stderr with a right-aligned coloured verb, in the
//! style of Cargo. stdout carries only machine-readable output.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

/// Status printer for stderr.
///
/// Colour is on when stderr is a terminal. A quiet printer drops status and
/// info lines but still shows warnings and errors.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// e.g. `   Rendering dune (720x576)`
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_verb(GREEN, verb, message);
        }
    }

    pub fn success(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_verb(GREEN, verb, message);
        }
    }

    pub fn info(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_verb(CYAN, verb, message);
        }
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_verb(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_verb(RED, verb, message);
    }

    /// A plain line with no verb column.
    pub fn line(&self, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{message}");
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// Severity label, red for errors and yellow otherwise.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_verb(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = if self.color {
            writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            writeln!(stderr, "{verb:>VERB_WIDTH$} {message}")
        };
    }
}

/// `plural(1, "stroke", "strokes")` is "1 stroke".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// `(720, 576)` as `720x576`.
pub fn format_shape((width, height): (usize, usize)) -> String {
    format!("{}x{}", width, height)
}

/// A path relative to the working directory when possible.
pub fn display_path(path: &Path) -> String {
    let Ok(cwd) = std::env::current_dir() else {
        return path.display().to_string();
    };
    match path.strip_prefix(&cwd) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
