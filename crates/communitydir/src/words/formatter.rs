//! Amount-to-words formatter.
//!
//! Turns a monetary amount into its English spelling, with configurable
//! handling for the two cases the lexicon alone cannot settle: negative
//! amounts and fractions that round up to a whole unit.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::lexicon::{spell_hundreds, spell_integer, LIMIT, SCALES};
use crate::error::{Error, Result};

/// The word returned for an amount of exactly zero.
const ZERO: &str = "zero";

/// Word placed before the magnitude under [`NegativePolicy::Prefix`].
const NEGATIVE: &str = "negative";

/// How negative amounts are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativePolicy {
    /// Treat negative amounts as invalid.
    #[default]
    Reject,

    /// Spell the magnitude after the word "negative".
    Prefix,
}

/// What happens when the fraction rounds to a full hundred cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentsOverflow {
    /// Add one to the integer part and drop the fraction (1.996 is "Two").
    #[default]
    Carry,

    /// Cap the fraction at ninety-nine cents (1.996 is "One point ninety-nine").
    Clamp,
}

/// Stateless amount-to-words formatter.
///
/// # Examples
///
/// ```
/// use communitydir::words::{NegativePolicy, WordsFormatter};
///
/// let formatter = WordsFormatter::new();
/// assert_eq!(formatter.format(1234.0), "One thousand, two hundred and thirty-four");
/// assert_eq!(formatter.format(-5.0), "");
///
/// let signed = formatter.with_negative_policy(NegativePolicy::Prefix);
/// assert_eq!(signed.format(-5.0), "Negative five");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordsFormatter {
    negative: NegativePolicy,
    cents_overflow: CentsOverflow,
}

impl WordsFormatter {
    /// Create a formatter with the default policies.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            negative: NegativePolicy::Reject,
            cents_overflow: CentsOverflow::Carry,
        }
    }

    /// Set the negative-amount policy.
    #[must_use]
    pub const fn with_negative_policy(mut self, policy: NegativePolicy) -> Self {
        self.negative = policy;
        self
    }

    /// Set the hundred-cents policy.
    #[must_use]
    pub const fn with_cents_overflow(mut self, overflow: CentsOverflow) -> Self {
        self.cents_overflow = overflow;
        self
    }

    /// The negative-amount policy in use.
    #[must_use]
    pub const fn negative_policy(&self) -> NegativePolicy {
        self.negative
    }

    /// The hundred-cents policy in use.
    #[must_use]
    pub const fn cents_overflow(&self) -> CentsOverflow {
        self.cents_overflow
    }

    /// Spell an amount, or return the empty string if it has no spelling.
    ///
    /// Never panics. Exactly zero gives `"zero"`; NaN, infinities,
    /// rejected negatives, amounts of a trillion or more and non-zero
    /// amounts that round to zero cents give `""`.
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        self.try_format(amount).unwrap_or_else(|err| {
            debug!(amount, error = %err, "Amount has no spelling");
            String::new()
        })
    }

    /// Spell an amount, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFinite`] for NaN and infinities.
    /// - [`Error::NegativeAmount`] for negatives under [`NegativePolicy::Reject`].
    /// - [`Error::AmountOutOfRange`] when the integer part, after any cents
    ///   carry, is one trillion or more.
    #[allow(clippy::float_cmp)]
    pub fn try_format(&self, amount: f64) -> Result<String> {
        if amount == 0.0 {
            return Ok(ZERO.to_string());
        }
        if !amount.is_finite() {
            return Err(Error::NotFinite);
        }

        let (sign, magnitude) = if amount < 0.0 {
            match self.negative {
                NegativePolicy::Reject => return Err(Error::NegativeAmount { value: amount }),
                NegativePolicy::Prefix => (Some(NEGATIVE), -amount),
            }
        } else {
            (None, amount)
        };

        let (whole, cents) = self.split(amount, magnitude)?;
        if whole == 0 && cents == 0 {
            trace!(amount, "Amount rounds to nothing");
            return Ok(String::new());
        }

        let mut result = String::new();
        if let Some(sign) = sign {
            result.push_str(sign);
            result.push(' ');
        }

        let integer = spell_integer(whole).ok_or_else(|| out_of_range(amount))?;
        if integer.is_empty() {
            result.push_str(ZERO);
        } else {
            result.push_str(&integer);
        }

        if cents > 0 {
            result.push_str(" point ");
            result.push_str(&spell_hundreds(cents));
        }

        Ok(capitalize_first(&result))
    }

    /// Split a non-negative magnitude into whole units and rounded cents.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn split(&self, amount: f64, magnitude: f64) -> Result<(u64, usize)> {
        let whole = magnitude.trunc();
        // LIMIT is exactly representable, and anything below it fits in u64
        if whole >= LIMIT as f64 {
            return Err(out_of_range(amount));
        }
        let mut whole = whole as u64;

        // fract() is in [0, 1), so this is in 0..=100
        let mut cents = (magnitude.fract() * 100.0).round() as usize;
        if cents >= 100 {
            match self.cents_overflow {
                CentsOverflow::Carry => {
                    trace!(amount, "Carrying a full hundred cents into the integer part");
                    whole += 1;
                    cents = 0;
                }
                CentsOverflow::Clamp => {
                    trace!(amount, "Clamping cents to ninety-nine");
                    cents = 99;
                }
            }
        }

        Ok((whole, cents))
    }
}

fn out_of_range(amount: f64) -> Error {
    Error::AmountOutOfRange {
        value: amount,
        scale: SCALES[SCALES.len() - 1],
    }
}

/// Upper-case the first character and leave the rest untouched.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
