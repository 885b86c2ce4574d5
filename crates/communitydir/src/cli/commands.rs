//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::words::{CentsOverflow, NegativePolicy};

/// Words command arguments.
#[derive(Debug, Args)]
pub struct WordsCommand {
    /// The amount as typed, e.g. "1,234.50" or "$75"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Currency label appended to the words (overrides config)
    #[arg(long, value_name = "LABEL")]
    pub currency: Option<String>,

    /// How negative amounts are spelled (overrides config)
    #[arg(long, value_enum)]
    pub negative: Option<NegativeArg>,

    /// What happens when cents round to a whole unit (overrides config)
    #[arg(long, value_enum)]
    pub cents_overflow: Option<CentsOverflowArg>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Phone number commands.
#[derive(Debug, Subcommand)]
pub enum PhoneCommand {
    /// Format a number for display
    Format {
        /// The phone number as entered
        number: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Check that a number matches a supported layout
    Validate {
        /// The phone number as entered
        number: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Strip everything but digits
    Clean {
        /// The phone number as entered
        number: String,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show configuration file path
    Path,

    /// Validate configuration file
    Validate {
        /// Path to config file (uses default if not specified)
        file: Option<PathBuf>,
    },
}

/// Negative amount policy for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NegativeArg {
    /// Negative amounts produce no words
    Reject,
    /// Spell as "Negative ..."
    Prefix,
}

impl From<NegativeArg> for NegativePolicy {
    fn from(arg: NegativeArg) -> Self {
        match arg {
            NegativeArg::Reject => Self::Reject,
            NegativeArg::Prefix => Self::Prefix,
        }
    }
}

/// Cents overflow policy for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CentsOverflowArg {
    /// Round up into the integer part
    Carry,
    /// Cap at ninety-nine cents
    Clamp,
}

impl From<CentsOverflowArg> for CentsOverflow {
    fn from(arg: CentsOverflowArg) -> Self {
        match arg {
            CentsOverflowArg::Carry => Self::Carry,
            CentsOverflowArg::Clamp => Self::Clamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_arg_conversion() {
        assert_eq!(NegativePolicy::from(NegativeArg::Reject), NegativePolicy::Reject);
        assert_eq!(NegativePolicy::from(NegativeArg::Prefix), NegativePolicy::Prefix);
    }

    #[test]
    fn test_cents_overflow_arg_conversion() {
        assert_eq!(
            CentsOverflow::from(CentsOverflowArg::Carry),
            CentsOverflow::Carry
        );
        assert_eq!(
            CentsOverflow::from(CentsOverflowArg::Clamp),
            CentsOverflow::Clamp
        );
    }
}
