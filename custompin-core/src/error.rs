//! Error types for the custompin tool
//!
//! PIN derivation failures are kept apart from configuration and I/O
//! failures so callers can tell a caller-fixable input problem from a
//! broken setup. No variant ever carries seed or key material.

use thiserror::Error;

/// Main error type for the custompin application
#[derive(Error, Debug)]
pub enum CustomPinError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to PIN derivation
    #[error("PIN error: {0}")]
    Pin(#[from] PinError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// PIN derivation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinError {
    /// A mandatory input was missing or out of range. Never retried.
    #[error("Invalid input: {field} {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The keyed-hash primitive or the time bucket could not be produced.
    #[error("PIN generator failure: {reason}")]
    Generator { reason: String },
}

impl PinError {
    pub(crate) fn required(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            reason: "is required".to_string(),
        }
    }

    pub(crate) fn generator(reason: impl Into<String>) -> Self {
        Self::Generator {
            reason: reason.into(),
        }
    }

    /// Whether the caller can fix this error by changing its input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CustomPinError>;
