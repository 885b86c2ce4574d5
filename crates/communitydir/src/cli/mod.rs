//! Command-line interface for communitydir.
//!
//! This module provides the CLI structure for the `cdir` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{CentsOverflowArg, ConfigCommand, NegativeArg, PhoneCommand, WordsCommand};

use crate::logging::Verbosity;

/// cdir - Formatting helpers for community directory records
///
/// Spells amounts in words for form previews and cleans, validates and
/// formats phone numbers the way directory records store and show them.
#[derive(Debug, Parser)]
#[command(name = "cdir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Spell an amount in words
    Words(WordsCommand),

    /// Clean, validate or format phone numbers
    #[command(subcommand)]
    Phone(PhoneCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
