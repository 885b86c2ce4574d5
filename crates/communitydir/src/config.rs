//! Configuration management for communitydir.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::phone::{PhoneFormatter, DEFAULT_AREA_CODE, DEFAULT_COUNTRY_CODE};
use crate::preview::AmountPreview;
use crate::words::{CentsOverflow, NegativePolicy, WordsFormatter};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "communitydir";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "COMMUNITYDIR_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `COMMUNITYDIR_`, sections split
///    on `__`, e.g. `COMMUNITYDIR_WORDS__CURRENCY_LABEL=JMD`)
/// 2. TOML config file at `~/.config/communitydir/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Amount-in-words configuration.
    pub words: WordsConfig,
    /// Phone number configuration.
    pub phone: PhoneConfig,
}

/// Amount-in-words configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// Label appended to previews, e.g. "dollars" or "JMD".
    /// Empty for no label.
    pub currency_label: String,
    /// How negative amounts are spelled.
    pub negative_policy: NegativePolicy,
    /// What happens when cents round up to a whole unit.
    pub cents_overflow: CentsOverflow,
}

/// Phone number configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    /// Three-digit area code expected on national numbers.
    pub area_code: String,
    /// Country code expected on international numbers.
    pub country_code: String,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            currency_label: "dollars".to_string(),
            negative_policy: NegativePolicy::default(),
            cents_overflow: CentsOverflow::default(),
        }
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            area_code: DEFAULT_AREA_CODE.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.words.currency_label.chars().any(char::is_control) {
            return Err(Error::config_validation(
                "currency_label must not contain control characters",
            ));
        }

        self.phone_formatter()?;
        Ok(())
    }

    /// Build the words formatter described by this configuration.
    #[must_use]
    pub fn words_formatter(&self) -> WordsFormatter {
        WordsFormatter::new()
            .with_negative_policy(self.words.negative_policy)
            .with_cents_overflow(self.words.cents_overflow)
    }

    /// Build the amount preview, optionally overriding the currency label.
    #[must_use]
    pub fn amount_preview(&self, currency_label: Option<&str>) -> AmountPreview {
        let label = currency_label.unwrap_or(&self.words.currency_label);
        AmountPreview::new(self.words_formatter(), label)
    }

    /// Build the phone formatter described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the area or country code is malformed.
    pub fn phone_formatter(&self) -> Result<PhoneFormatter> {
        PhoneFormatter::new(&self.phone.area_code, &self.phone.country_code)
    }
}
