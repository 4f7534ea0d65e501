//! Error handling for WheelQuiz
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for WheelQuiz application
#[derive(Error, Debug)]
pub enum WheelQuizError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Language bundle not found: {lang}")]
    BundleNotFound { lang: String },

    #[error("Invalid language bundle for {lang}: {reason}")]
    InvalidBundle { lang: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for WheelQuiz operations
pub type Result<T> = std::result::Result<T, WheelQuizError>;

impl WheelQuizError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            WheelQuizError::Config(_) => false,
            WheelQuizError::ConfigLoad(_) => false,
            WheelQuizError::BundleNotFound { .. } => true,
            WheelQuizError::InvalidBundle { .. } => true,
            WheelQuizError::Serialization(_) => false,
            WheelQuizError::Io(_) => true,
            WheelQuizError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            WheelQuizError::Config(_) => ErrorSeverity::Critical,
            WheelQuizError::ConfigLoad(_) => ErrorSeverity::Critical,
            WheelQuizError::BundleNotFound { .. } => ErrorSeverity::Warning,
            WheelQuizError::InvalidBundle { .. } => ErrorSeverity::Warning,
            WheelQuizError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_errors_are_recoverable_warnings() {
        let err = WheelQuizError::BundleNotFound { lang: "xx".to_string() };
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.to_string(), "Language bundle not found: xx");
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = WheelQuizError::Config("missing fallback".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().to_string(), "CRITICAL");
    }
}
