pub mod check;
pub mod colormaps;
pub mod completions;
pub mod init;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::discovery::{discover, discover_paths, DiscoveryResult};
use crate::error::Result;

/// fractalinator - noise-seeded multibrot artwork renderer
#[derive(Parser, Debug)]
#[command(name = "fractalinator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render artworks to PNG, replaying their strokes
    Render(render::RenderArgs),

    /// Validate session files without rendering
    Check(check::CheckArgs),

    /// Write a starter artwork.art.md
    Init(init::InitArgs),

    /// List the built-in colormaps
    Colormaps(colormaps::ColormapsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Discover sessions from explicit paths, or the current project when none
/// are given.
fn discover_inputs(files: &[PathBuf]) -> Result<DiscoveryResult> {
    if files.is_empty() {
        discover(".")
    } else {
        discover_paths(files)
    }
}
