//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordstop_core::GroupsConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the groups configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating groups configuration: {}", self.config.display());

        let raw = match std::fs::read_to_string(&self.config) {
            Ok(raw) => raw,
            Err(e) => {
                println!("✗ Configuration could not be read!");
                println!("  Error: {e}");
                return Err(anyhow::anyhow!("Validation failed: {}", e));
            }
        };

        let outcome = GroupsConfig::from_toml_str(&raw).map_err(anyhow::Error::from)
            .and_then(|config| config.build().map_err(anyhow::Error::from));

        match outcome {
            Ok(groups) => {
                println!("✓ Configuration is valid!");
                println!("  Groups: {}", groups.group_count());
                for name in groups.names() {
                    println!("    - {name}");
                }
                println!("  Command intercept: {}", groups.command_intercept());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
