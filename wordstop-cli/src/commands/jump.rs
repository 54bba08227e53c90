//! Jump command implementation

use anyhow::{ensure, Result};
use clap::Args;
use wordstop_core::{find_stop, Motion, TextSource};

use crate::input::{GroupsOpt, TextInput};
use crate::output::{JumpReport, OutputFormat};

/// Caret motion choices
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MotionArg {
    /// Stop where words or punctuation runs begin
    Words,
    /// Stop where words or punctuation runs end
    WordEnds,
    /// Like words, plus script transitions
    Subwords,
    /// Like word-ends, plus script transitions
    SubwordEnds,
}

impl From<MotionArg> for Motion {
    fn from(arg: MotionArg) -> Self {
        match arg {
            MotionArg::Words => Motion::Words,
            MotionArg::WordEnds => Motion::WordEnds,
            MotionArg::Subwords => Motion::Subwords,
            MotionArg::SubwordEnds => Motion::SubwordEnds,
        }
    }
}

/// Arguments for the jump command
#[derive(Debug, Args)]
pub struct JumpArgs {
    #[command(flatten)]
    pub input: TextInput,

    #[command(flatten)]
    pub groups: GroupsOpt,

    /// Starting position of the caret
    #[arg(short, long, value_name = "POS")]
    pub pos: usize,

    /// Scan backward instead of forward
    #[arg(short, long)]
    pub backward: bool,

    /// Motion kind
    #[arg(long, value_enum, default_value = "words")]
    pub by: MotionArg,

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

impl JumpArgs {
    /// Execute the jump command
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

        let motion: Motion = self.by.into();
        let stop = find_stop(&text, &groups, self.pos, !self.backward, motion.stop_mask());
        log::debug!("jump from {} to {stop}", self.pos);

        match self.format {
            OutputFormat::Text => println!("{stop}"),
            OutputFormat::Json => {
                let report = JumpReport {
                    from: self.pos,
                    to: stop,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Ok(())
    }
}
