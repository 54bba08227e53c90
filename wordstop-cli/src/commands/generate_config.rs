//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use wordstop_core::DEFAULT_GROUPS_TOML;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating groups configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, DEFAULT_GROUPS_TOML)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize the groups");
        println!("2. Validate your configuration:");
        println!("   wordstop validate --config {}", self.output.display());
        println!("3. Use it for inspection:");
        println!(
            "   wordstop classify --text \"abcひらがな\" --groups {}",
            self.output.display()
        );

        Ok(())
    }
}
