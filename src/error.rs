use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fractalinator operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArtError {
    #[error("IO error: {0}")]
    #[diagnostic(code(fractalinator::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(fractalinator::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(fractalinator::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(fractalinator::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Load error: {message}")]
    #[diagnostic(code(fractalinator::load))]
    Load {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown colormap: {name}")]
    #[diagnostic(code(fractalinator::colormap))]
    UnknownColormap {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Stroke at ({x}, {y}) is outside the {width}x{height} canvas")]
    #[diagnostic(
        code(fractalinator::bounds),
        help("Clamp stroke coordinates to 0..width and 0..height")
    )]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Intensity field is {found:?} but the artwork shape is {expected:?}")]
    #[diagnostic(code(fractalinator::shape))]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl ArtError {
    /// Shorthand for a configuration error with no help text.
    pub(crate) fn config(message: impl Into<String>) -> Self {
        ArtError::Config {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtError>;
