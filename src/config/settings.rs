//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::models::GameSettings;

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    pub game: GameConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Language used when a requested bundle is unavailable
    pub fallback_language: String,
    /// Directory holding `<code>.json` bundles loaded on demand
    pub translations_dir: String,
    /// Overrides the locale reported by the operating system
    pub preferred_language: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

/// Overrides applied to the initial game settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub team_count: Option<usize>,
    pub buy_vowels: Option<bool>,
    pub bankrupt_per_round: Option<bool>,
    pub spin_min: Option<u64>,
    pub spin_max: Option<u64>,
    pub charset: Option<String>,
    pub vowels: Option<String>,
    pub vowel_price: Option<i64>,
    pub answer_reward: Option<i64>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("WHEELQUIZ")
                .separator("__")
                .try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::WheelQuizError> {
        super::validation::validate_settings(self)
    }
}

impl GameConfig {
    /// Apply the configured overrides on top of the built-in defaults
    pub fn apply(&self, settings: &mut GameSettings) {
        if let Some(count) = self.team_count {
            settings.team_count = count;
        }
        if let Some(buy_vowels) = self.buy_vowels {
            settings.buy_vowels = buy_vowels;
        }
        if let Some(bankrupt) = self.bankrupt_per_round {
            settings.bankrupt_per_round = bankrupt;
        }
        if let Some(min) = self.spin_min {
            settings.wheel.spin_min = min;
        }
        if let Some(max) = self.spin_max {
            settings.wheel.spin_max = max;
        }
        if let Some(charset) = &self.charset {
            settings.charset = charset.clone();
        }
        if let Some(vowels) = &self.vowels {
            settings.vowels = vowels.clone();
        }
        if let Some(price) = self.vowel_price {
            settings.vowel_price = price;
        }
        if let Some(reward) = self.answer_reward {
            settings.answer_reward = reward;
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            fallback_language: "en".to_string(),
            translations_dir: "translations".to_string(),
            preferred_language: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            json: false,
        }
    }
}
