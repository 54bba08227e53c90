//! Input loading: the text to inspect and the groups configuration

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use wordstop_core::{CharGroups, GroupsConfig, PlainText};

/// Where the text under inspection comes from.
#[derive(Debug, Args)]
pub struct TextInput {
    /// Input file (stdin when neither a file nor --text is given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Inline text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,
}

impl TextInput {
    /// Loads the document.
    pub fn load(&self) -> Result<PlainText> {
        if let Some(text) = &self.text {
            return Ok(PlainText::new(text));
        }

        let raw = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
        };

        Ok(PlainText::new(&raw))
    }
}

/// Where the character groups come from.
#[derive(Debug, Args)]
pub struct GroupsOpt {
    /// Character groups configuration file (TOML); embedded defaults when omitted
    #[arg(short, long, value_name = "FILE")]
    pub groups: Option<PathBuf>,
}

impl GroupsOpt {
    /// Loads and compiles the group registry.
    pub fn load(&self) -> Result<CharGroups> {
        let config = self.load_config()?;
        config
            .build()
            .context("failed to compile character groups")
    }

    /// Loads the configuration without compiling it.
    pub fn load_config(&self) -> Result<GroupsConfig> {
        match &self.groups {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                GroupsConfig::from_toml_str(&raw)
                    .with_context(|| format!("failed to parse {}", path.display()))
            }
            None => Ok(GroupsConfig::default()),
        }
    }
}
