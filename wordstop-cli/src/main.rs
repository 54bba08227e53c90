//! wordstop command-line entry point

use clap::Parser;
use wordstop_cli::commands::Commands;

/// Inspect word boundaries in mixed-script text
#[derive(Debug, Parser)]
#[command(name = "wordstop", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
