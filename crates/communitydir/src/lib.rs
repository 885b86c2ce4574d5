//! `communitydir` - Formatting core for a community directory
//!
//! This library spells monetary amounts in English words for form previews
//! and cleans, validates and formats phone numbers for directory records.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod phone;
pub mod preview;
pub mod words;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use phone::{PhoneFormatter, PhoneKind};
pub use preview::{Amount, AmountPreview};
pub use words::{number_to_words, WordsFormatter};
