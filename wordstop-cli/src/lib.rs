//! Wordstop CLI library
//!
//! This library provides the command-line interface for the wordstop
//! word boundary classification system.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
