//! Error types for airres.
//!
//! Registry and directory operations never fail; they report capacity and
//! lookup outcomes as `bool` or `Option`. The errors here cover the layers
//! around them: configuration, the interactive session and console I/O.

use thiserror::Error;

/// The main error type for airres operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Session Errors ===
    /// A menu selection was not one of the offered options.
    #[error("invalid menu option: '{input}'")]
    InvalidChoice {
        /// What the user typed.
        input: String,
    },

    /// A flight number did not match the configured pattern.
    #[error("invalid flight number '{flight}' (expected pattern {pattern})")]
    InvalidFlightNumber {
        /// The flight number as entered.
        flight: String,
        /// The pattern it had to match.
        pattern: String,
    },

    /// Input ended while the session was waiting for a value.
    #[error("input closed")]
    InputClosed,

    // === I/O Errors ===
    /// Console read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for airres operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create an invalid menu choice error.
    #[must_use]
    pub fn invalid_choice(input: impl Into<String>) -> Self {
        Self::InvalidChoice {
            input: input.into(),
        }
    }

    /// Check if this error means the input stream ended.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}
