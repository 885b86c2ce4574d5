//! Phone number cleaning, validation and display formatting.
//!
//! Directory records store phone numbers as bare digits and display them in
//! one of three layouts, depending on how many digits were entered:
//!
//! | Digits                         | Kind            | Display              |
//! |--------------------------------|-----------------|----------------------|
//! | 7                              | `Local`         | `555-1234`           |
//! | area code + 7                  | `National`      | `(876) 555-1234`     |
//! | country code + area code + 7   | `International` | `+1 (876) 555-1234`  |
//!
//! The defaults are Jamaica's area code `876` and the NANP country code `1`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::error::{Error, Result};

/// Default area code.
pub const DEFAULT_AREA_CODE: &str = "876";

/// Default country code.
pub const DEFAULT_COUNTRY_CODE: &str = "1";

/// Digits in a subscriber number (exchange + line).
const LOCAL_DIGITS: usize = 7;

/// Digits in the exchange part of a subscriber number.
const EXCHANGE_DIGITS: usize = 3;

/// Anything but `0-9`. `\D` would keep non-ASCII digits such as `١٢٣`.
static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("non-digit pattern is valid"));

/// The layout a phone number was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    /// Subscriber number only.
    Local,
    /// Area code and subscriber number.
    National,
    /// Country code, area code and subscriber number.
    International,
}

/// Strip everything but ASCII digits, giving the storage form.
#[must_use]
pub fn clean_phone_number(phone: &str) -> String {
    NON_DIGIT.replace_all(phone, "").into_owned()
}

/// Format with the default area and country codes.
///
/// Numbers that match no layout are returned unchanged.
#[must_use]
pub fn format_phone_number(phone: &str) -> String {
    PhoneFormatter::default().format(phone)
}

/// Validate with the default area and country codes.
#[must_use]
pub fn validate_phone_number(phone: &str) -> bool {
    PhoneFormatter::default().validate(phone)
}

/// Phone formatter for one area code and country code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormatter {
    area_code: String,
    country_code: String,
}

impl PhoneFormatter {
    /// Create a formatter for the given codes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] if the area code is not exactly
    /// three digits or the country code is not one to three digits.
    pub fn new(area_code: impl Into<String>, country_code: impl Into<String>) -> Result<Self> {
        let area_code = area_code.into();
        let country_code = country_code.into();

        if area_code.len() != 3 || !is_all_digits(&area_code) {
            return Err(Error::config_validation(format!(
                "area_code must be exactly 3 digits, got '{area_code}'"
            )));
        }
        if !(1..=3).contains(&country_code.len()) || !is_all_digits(&country_code) {
            return Err(Error::config_validation(format!(
                "country_code must be 1 to 3 digits, got '{country_code}'"
            )));
        }

        Ok(Self {
            area_code,
            country_code,
        })
    }

    /// The area code in use.
    #[must_use]
    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    /// The country code in use.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Work out which layout a number was entered in, if any.
    #[must_use]
    pub fn classify(&self, phone: &str) -> Option<PhoneKind> {
        self.classify_digits(&clean_phone_number(phone))
    }

    /// Check that a number matches one of the supported layouts.
    #[must_use]
    pub fn validate(&self, phone: &str) -> bool {
        self.classify(phone).is_some()
    }

    /// Format a number for display, returning the input unchanged if it
    /// matches no layout.
    #[must_use]
    pub fn format(&self, phone: &str) -> String {
        self.try_format(phone).unwrap_or_else(|_| phone.to_string())
    }

    /// Format a number for display.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPhone`] if the number matches no layout.
    pub fn try_format(&self, phone: &str) -> Result<String> {
        let digits = clean_phone_number(phone);
        let Some(kind) = self.classify_digits(&digits) else {
            trace!(digits = digits.len(), "Phone number matches no layout");
            return Err(Error::invalid_phone(phone));
        };

        let subscriber = &digits[digits.len() - LOCAL_DIGITS..];
        let (exchange, line) = subscriber.split_at(EXCHANGE_DIGITS);

        Ok(match kind {
            PhoneKind::Local => format!("{exchange}-{line}"),
            PhoneKind::National => format!("({}) {exchange}-{line}", self.area_code),
            PhoneKind::International => format!(
                "+{} ({}) {exchange}-{line}",
                self.country_code, self.area_code
            ),
        })
    }

    fn classify_digits(&self, digits: &str) -> Option<PhoneKind> {
        let national_len = self.area_code.len() + LOCAL_DIGITS;
        let international_len = self.country_code.len() + national_len;

        if digits.len() == LOCAL_DIGITS {
            Some(PhoneKind::Local)
        } else if digits.len() == national_len && digits.starts_with(&self.area_code) {
            Some(PhoneKind::National)
        } else if digits.len() == international_len
            && digits.starts_with(&self.country_code)
            && digits[self.country_code.len()..].starts_with(&self.area_code)
        {
            Some(PhoneKind::International)
        } else {
            None
        }
    }
}

impl Default for PhoneFormatter {
    fn default() -> Self {
        Self {
            area_code: DEFAULT_AREA_CODE.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

fn is_all_digits(value: &str) -> bool {
    !NON_DIGIT.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_formatting() {
        assert_eq!(clean_phone_number("(876) 555-1234"), "8765551234");
        assert_eq!(clean_phone_number("+1 876.555.1234"), "18765551234");
        assert_eq!(clean_phone_number("no digits"), "");
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        assert_eq!(clean_phone_number("٥٥٥-١٢٣٤"), "");
        assert_eq!(clean_phone_number("١٢٣4"), "4");
        assert_eq!(clean_phone_number("５５５-1234"), "1234");
    }

    #[test]
    fn test_non_ascii_digits_do_not_count() {
        assert!(!validate_phone_number("١٢٣4"));
        assert!(!validate_phone_number("٥٥٥-١٢٣٤"));
        assert!(validate_phone_number("٥555-1234"));
    }

    #[test]
    fn test_format_non_ascii_digits_unchanged() {
        assert_eq!(format_phone_number("١٢٣4"), "١٢٣4");
        assert_eq!(format_phone_number("٥٥٥-١٢٣٤"), "٥٥٥-١٢٣٤");
        assert_eq!(format_phone_number("٥555-1234"), "555-1234");
        assert!(PhoneFormatter::default().try_format("١٢٣4").is_err());
    }

    #[test]
    fn test_new_rejects_non_ascii_codes() {
        assert!(PhoneFormatter::new("٨٧٦", "1").is_err());
        assert!(PhoneFormatter::new("876", "١").is_err());
    }

    #[test]
    fn test_classify() {
        let formatter = PhoneFormatter::default();
        assert_eq!(formatter.classify("555-1234"), Some(PhoneKind::Local));
        assert_eq!(formatter.classify("876-555-1234"), Some(PhoneKind::National));
        assert_eq!(
            formatter.classify("1 876 555 1234"),
            Some(PhoneKind::International)
        );
        assert_eq!(formatter.classify("12345"), None);
    }

    #[test]
    fn test_classify_rejects_other_area_codes() {
        let formatter = PhoneFormatter::default();
        assert_eq!(formatter.classify("212-555-1234"), None);
        assert_eq!(formatter.classify("1-212-555-1234"), None);
    }

    #[test]
    fn test_ten_digits_with_country_code_is_not_valid() {
        assert!(!validate_phone_number("187655512"));
        assert!(!validate_phone_number("1876555123"));
        assert_eq!(format_phone_number("1876555123"), "1876555123");
    }

    #[test]
    fn test_format_layouts() {
        assert_eq!(format_phone_number("5551234"), "555-1234");
        assert_eq!(format_phone_number("876-555-1234"), "(876) 555-1234");
        assert_eq!(format_phone_number("18765551234"), "+1 (876) 555-1234");
    }

    #[test]
    fn test_format_returns_invalid_input_unchanged() {
        assert_eq!(format_phone_number("12345"), "12345");
        assert_eq!(format_phone_number("call me"), "call me");
    }

    #[test]
    fn test_try_format_invalid() {
        let err = PhoneFormatter::default().try_format("12345").unwrap_err();
        assert!(matches!(err, Error::InvalidPhone { .. }));
    }

    #[test]
    fn test_validate() {
        assert!(validate_phone_number("555 1234"));
        assert!(validate_phone_number("(876) 555-1234"));
        assert!(validate_phone_number("+1 (876) 555-1234"));
        assert!(!validate_phone_number(""));
        assert!(!validate_phone_number("876555123"));
    }

    #[test]
    fn test_custom_codes() {
        let formatter = PhoneFormatter::new("658", "1").unwrap();
        assert_eq!(formatter.area_code(), "658");
        assert_eq!(formatter.country_code(), "1");
        assert_eq!(formatter.format("6585551234"), "(658) 555-1234");
        assert!(!formatter.validate("8765551234"));
    }

    #[test]
    fn test_longer_country_code() {
        let formatter = PhoneFormatter::new("020", "44").unwrap();
        assert_eq!(formatter.format("44 020 555 1234"), "+44 (020) 555-1234");
    }

    #[test]
    fn test_new_rejects_bad_codes() {
        assert!(PhoneFormatter::new("87", "1").is_err());
        assert!(PhoneFormatter::new("8a6", "1").is_err());
        assert!(PhoneFormatter::new("876", "").is_err());
        assert!(PhoneFormatter::new("876", "1234").is_err());
    }

    #[test]
    fn test_phone_kind_serializes() {
        let json = serde_json::to_string(&PhoneKind::International).unwrap();
        assert_eq!(json, "\"international\"");
    }
}
