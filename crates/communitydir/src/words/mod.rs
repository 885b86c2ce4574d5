//! Spelling monetary amounts in English words.
//!
//! Used to give a human-readable confirmation of an entered figure, such as a
//! salary typed into a member form:
//!
//! - **Lexicon**: fixed tables for units, teens, tens and the scale words
//!   thousand, million and billion.
//!
//! - **Grouping**: the integer part is spelled in three-digit groups joined
//!   by `", "`, with `" and "` inside a group after the hundreds.
//!
//! - **Cents**: a non-zero fraction, rounded to two digits, is appended as a
//!   `" point ..."` clause.
//!
//! # Example
//!
//! ```
//! use communitydir::words::number_to_words;
//!
//! assert_eq!(number_to_words(0.0), "zero");
//! assert_eq!(number_to_words(0.001), "");
//! assert_eq!(number_to_words(42.0), "Forty-two");
//! assert_eq!(number_to_words(100.5), "One hundred point fifty");
//! assert_eq!(number_to_words(f64::NAN), "");
//! ```

mod formatter;
mod lexicon;

pub use formatter::{CentsOverflow, NegativePolicy, WordsFormatter};

/// Spell an amount using the default policies.
///
/// Returns the empty string for amounts that have no spelling; callers treat
/// that as "nothing to show".
#[must_use]
pub fn number_to_words(amount: f64) -> String {
    WordsFormatter::new().format(amount)
}
