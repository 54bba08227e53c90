//! Output formatting for classification reports

use serde::Serialize;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated text, one entry per line
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// One classified position
#[derive(Debug, Serialize)]
pub struct PositionReport {
    pub pos: usize,
    pub bits: u16,
    pub labels: String,
}

/// One word region
#[derive(Debug, Serialize)]
pub struct RegionReport {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// One caret jump
#[derive(Debug, Serialize)]
pub struct JumpReport {
    pub from: usize,
    pub to: usize,
}
