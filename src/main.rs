use clap::Parser;
use fractalinator::cli::{self, Cli, Commands};
use fractalinator::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Render(args) => {
            cli::render::run(args, &printer)?;
        }
        Commands::Check(args) => {
            cli::check::run(args, &printer)?;
        }
        Commands::Init(args) => cli::init::run(args, &printer)?,
        Commands::Colormaps(args) => cli::colormaps::run(args, &printer)?,
        Commands::Completions(args) => cli::completions::run(args, &printer)?,
    }

    Ok(())
}
