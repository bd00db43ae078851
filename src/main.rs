use clap::Parser;
use dragon::cli::{Cli, Commands};
use dragon::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command.unwrap_or_default() {
        Commands::Render(args) => dragon::cli::render::run(args, &printer)?,
        Commands::Info(args) => dragon::cli::info::run(args, &printer)?,
        Commands::Init(args) => dragon::cli::init::run(args, &printer)?,
        Commands::Completions(args) => dragon::cli::completions::run(args)?,
    }

    Ok(())
}
