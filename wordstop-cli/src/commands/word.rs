//! Word command implementation

use anyhow::{ensure, Result};
use clap::Args;
use wordstop_core::{word_region, Granularity, TextSource};

use crate::input::{GroupsOpt, TextInput};
use crate::output::{OutputFormat, RegionReport};

/// Region granularity choices
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GranularityArg {
    /// Stop at word and punctuation boundaries
    Words,
    /// Also stop at script transitions inside words
    Subwords,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Words => Granularity::Words,
            GranularityArg::Subwords => Granularity::Subwords,
        }
    }
}

/// Arguments for the word command
#[derive(Debug, Args)]
pub struct WordArgs {
    #[command(flatten)]
    pub input: TextInput,

    #[command(flatten)]
    pub groups: GroupsOpt,

    /// Point whose enclosing word to report
    #[arg(short, long, value_name = "POS")]
    pub pos: usize,

    /// Region granularity
    #[arg(long, value_enum, default_value = "words")]
    pub by: GranularityArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl WordArgs {
    /// Execute the word command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let text = self.input.load()?;
        let groups = self.groups.load()?;

        ensure!(
            self.pos <= text.len(),
            "position {} is outside the document (length {})",
            self.pos,
            text.len()
        );

        let region = word_region(&text, &groups, self.pos, self.by.into());
        log::debug!("word at {}: [{}, {})", self.pos, region.start, region.end);

        let report = RegionReport {
            start: region.start,
            end: region.end,
            text: text.slice(region.start, region.end),
        };

        match self.format {
            OutputFormat::Text => {
                println!("{}..{}\t{}", report.start, report.end, report.text);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(())
    }
}
