//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{WheelQuizError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;
    validate_game_config(&settings.game)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.fallback_language.is_empty() {
        return Err(WheelQuizError::Config(
            "Fallback language is required".to_string()
        ));
    }

    if config.translations_dir.is_empty() {
        return Err(WheelQuizError::Config(
            "Translations directory is required".to_string()
        ));
    }

    if let Some(preferred) = &config.preferred_language {
        if preferred.trim().is_empty() {
            return Err(WheelQuizError::Config(
                "Preferred language cannot be blank".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(WheelQuizError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(WheelQuizError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate game setting overrides
fn validate_game_config(config: &super::GameConfig) -> Result<()> {
    if config.team_count == Some(0) {
        return Err(WheelQuizError::Config(
            "Team count must be greater than 0".to_string()
        ));
    }

    if let (Some(min), Some(max)) = (config.spin_min, config.spin_max) {
        if min > max {
            return Err(WheelQuizError::Config(
                format!("Wheel spin minimum ({}) cannot exceed maximum ({})", min, max)
            ));
        }
    }

    if matches!(config.vowel_price, Some(price) if price < 0) {
        return Err(WheelQuizError::Config(
            "Vowel price cannot be negative".to_string()
        ));
    }

    Ok(())
}
