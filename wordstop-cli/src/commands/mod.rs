//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod classify;
pub mod generate_config;
pub mod jump;
pub mod validate;
pub mod word;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show boundary attributes for positions in the input text
    Classify(classify::ClassifyArgs),

    /// Show the word region enclosing a position
    Word(word::WordArgs),

    /// Find the next stop position from a point
    Jump(jump::JumpArgs),

    /// Validate a character groups configuration file
    Validate(validate::ValidateArgs),

    /// Write a starter character groups configuration
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Classify(args) => args.execute(),
            Commands::Word(args) => args.execute(),
            Commands::Jump(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level),
    )
    .try_init();
}
