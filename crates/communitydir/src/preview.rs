//! Live "amount in words" preview for amount fields.
//!
//! Forms show the spelled amount under the input while the user types. The
//! preview parses the raw text, spells it, and appends the currency label the
//! form chose. No preview is shown when the text is not an amount.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::error::{Error, Result};
use crate::words::WordsFormatter;

/// Optional sign, digits with or without comma thousands separators, and an
/// optional fraction.
static AMOUNT_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:\d{1,3}(?:,\d{3})+|\d*)(?:\.\d*)?$").expect("amount syntax is valid")
});

/// An amount parsed from user text.
///
/// Accepts an optional leading `$`, an optional `-`, comma thousands
/// separators and a decimal point: `"1,234.50"`, `"$ 75"`, `".5"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// The numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let body = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();

        if body.is_empty() {
            return Err(Error::invalid_amount(input, "no digits"));
        }
        if !AMOUNT_SYNTAX.is_match(body) {
            return Err(Error::invalid_amount(
                input,
                "expected digits with optional thousands separators and decimal point",
            ));
        }

        let digits: String = body.chars().filter(|c| *c != ',').collect();
        digits
            .parse::<f64>()
            .map(Self)
            .map_err(|e| Error::invalid_amount(input, e.to_string()))
    }
}

/// Everything the preview knows about one input, for structured output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewReport {
    /// The text as entered.
    pub input: String,
    /// The parsed value, if the text was an amount.
    pub amount: Option<f64>,
    /// The spelled amount without the currency label.
    pub words: String,
    /// The line to display, if any.
    pub preview: Option<String>,
}

/// Renders the preview line for an amount field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountPreview {
    formatter: WordsFormatter,
    currency_label: String,
}

impl AmountPreview {
    /// Create a preview with the given formatter and currency label.
    ///
    /// An empty label means no suffix.
    #[must_use]
    pub fn new(formatter: WordsFormatter, currency_label: impl Into<String>) -> Self {
        Self {
            formatter,
            currency_label: currency_label.into(),
        }
    }

    /// The currency label appended to the words.
    #[must_use]
    pub fn currency_label(&self) -> &str {
        &self.currency_label
    }

    /// Render the preview for raw field text.
    ///
    /// Returns `None` when the text is not an amount or the amount has no
    /// spelling.
    #[must_use]
    pub fn render(&self, input: &str) -> Option<String> {
        match input.parse::<Amount>() {
            Ok(amount) => self.render_amount(amount.value()),
            Err(err) => {
                trace!(error = %err, "No preview for input");
                None
            }
        }
    }

    /// Render the preview for an already-parsed amount.
    #[must_use]
    pub fn render_amount(&self, amount: f64) -> Option<String> {
        let words = self.formatter.format(amount);
        self.suffix(words)
    }

    /// Build the full report for raw field text.
    #[must_use]
    pub fn report(&self, input: &str) -> PreviewReport {
        let amount = input.parse::<Amount>().ok().map(Amount::value);
        let words = amount
            .map(|value| self.formatter.format(value))
            .unwrap_or_default();
        let preview = self.suffix(words.clone());

        PreviewReport {
            input: input.to_string(),
            amount,
            words,
            preview,
        }
    }

    fn suffix(&self, words: String) -> Option<String> {
        if words.is_empty() {
            None
        } else if self.currency_label.is_empty() {
            Some(words)
        } else {
            Some(format!("{words} {}", self.currency_label))
        }
    }
}

impl Default for AmountPreview {
    fn default() -> Self {
        Self::new(WordsFormatter::new(), "dollars")
    }
}
