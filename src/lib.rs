//! WheelQuiz
//!
//! Game state and localization for a wheel-of-fortune style party quiz.
//! This library provides the state store holding teams, letters, tiles and
//! wheel values, and the loader that installs translation bundles on demand.

#![allow(non_snake_case)]

pub mod config;
pub mod document;
pub mod models;
pub mod state;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{WheelQuizError, Result};

// Re-export main components for easy access
pub use document::Document;
pub use state::{AppContext, GameStore, StoreHandle};
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
