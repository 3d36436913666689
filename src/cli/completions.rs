//! Completions command: print or save a shell completion script.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::{ArtError, Result};
use crate::output::{display_path, Printer};

use super::Cli;

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: CompletionsArgs, printer: &Printer) -> Result<()> {
    match &args.output {
        None => generate_into(args.shell, &mut io::stdout().lock()),
        Some(path) => {
            let mut script = Vec::new();
            generate_into(args.shell, &mut script)?;
            fs::write(path, script).map_err(|e| ArtError::Io {
                path: path.clone(),
                message: format!("Failed to write completions: {}", e),
            })?;
            printer.success("Wrote", &format!("{} completions to {}", args.shell, display_path(path)));
            Ok(())
        }
    }
}

/// Write the completion script for `shell`, named after the binary.
pub fn generate_into(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bash_script_names_subcommands() {
        let mut script = Vec::new();
        generate_into(Shell::Bash, &mut script).unwrap();
        let script = String::from_utf8(script).unwrap();

        assert!(script.contains("fractalinator"));
        for sub in ["render", "check", "init", "colormaps"] {
            assert!(script.contains(sub), "{}", sub);
        }
    }

    #[test]
    fn test_output_flag_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fractalinator.fish");
        let args = CompletionsArgs {
            shell: Shell::Fish,
            output: Some(path.clone()),
        };
        run(args, &Printer::new().quiet(true)).unwrap();

        let script = std::fs::read_to_string(&path).unwrap();
        assert!(script.contains("complete -c fractalinator"));
    }
}
