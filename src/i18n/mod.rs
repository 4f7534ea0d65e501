//! Internationalization module
//!
//! This module handles multi-language support for the game: the compiled-in
//! fallback bundle, on-demand bundle loading, language detection, message
//! formatting and pluralization.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{
    I18n, TranslationParams, TranslationStats, LanguageStats,
    DEFAULT_LANGUAGE, primary_subtag, system_locale,
};
