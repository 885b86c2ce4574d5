//! Error types for communitydir.
//!
//! This module defines all error types used throughout the communitydir crate.
//! The total formatting functions never surface these; they back the `try_*`
//! variants and the CLI.

use thiserror::Error;

/// The main error type for communitydir operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Amount Errors ===
    /// The amount was NaN or infinite.
    #[error("amount is not a finite number")]
    NotFinite,

    /// The amount was below zero and negatives are rejected.
    #[error("negative amount not allowed: {value}")]
    NegativeAmount {
        /// The rejected value.
        value: f64,
    },

    /// The integer part does not fit the scale table.
    #[error("amount {value} exceeds the largest supported scale ({scale})")]
    AmountOutOfRange {
        /// The rejected value.
        value: f64,
        /// The largest scale word available.
        scale: &'static str,
    },

    /// Text could not be parsed as an amount.
    #[error("invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The text as entered.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    // === Phone Errors ===
    /// A phone number did not match any supported layout.
    #[error("invalid phone number '{input}'")]
    InvalidPhone {
        /// The number as entered.
        input: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for communitydir operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid amount error.
    #[must_use]
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid phone error.
    #[must_use]
    pub fn invalid_phone(input: impl Into<String>) -> Self {
        Self::InvalidPhone {
            input: input.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error comes from a rejected amount.
    ///
    /// These are the errors the total formatter maps to an empty string.
    #[must_use]
    pub fn is_amount_error(&self) -> bool {
        matches!(
            self,
            Self::NotFinite
                | Self::NegativeAmount { .. }
                | Self::AmountOutOfRange { .. }
                | Self::InvalidAmount { .. }
        )
    }

    /// Check if this error is a configuration problem.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad(_) | Self::ConfigValidation { .. })
    }
}
