//! Classify command implementation

use anyhow::{ensure, Result};
use clap::Args;
use wordstop_core::{classify, explain, TextSource};

use crate::input::{GroupsOpt, TextInput};
use crate::output::{OutputFormat, PositionReport};

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: TextInput,

    #[command(flatten)]
    pub groups: GroupsOpt,

    /// Position to classify (every position when omitted)
    #[arg(short, long, value_name = "POS")]
    pub pos: Option<usize>,

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

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let text = self.input.load()?;
        let groups = self.groups.load()?;

        let positions: Vec<usize> = match self.pos {
            Some(pos) => {
                ensure!(
                    pos <= text.len(),
                    "position {pos} is outside the document (length {})",
                    text.len()
                );
                vec![pos]
            }
            None => (0..=text.len()).collect(),
        };

        log::info!(
            "classifying {} position(s) over {} characters",
            positions.len(),
            text.len()
        );

        let reports: Vec<PositionReport> = positions
            .into_iter()
            .map(|pos| {
                let attrs = classify(&text, &groups, pos);
                PositionReport {
                    pos,
                    bits: attrs.bits(),
                    labels: explain(attrs.bits()),
                }
            })
            .collect();

        match self.format {
            OutputFormat::Text => {
                for report in &reports {
                    println!("{}\t{}", report.pos, report.labels);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }

        Ok(())
    }
}
