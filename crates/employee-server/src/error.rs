//! Error types for the preview server

use std::{error::Error as StdError, fmt};

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that can occur while configuring or running the server
#[derive(Debug)]
pub enum ServerError {
    /// I/O error, e.g. binding the listener
    Io(std::io::Error),

    /// Configuration could not be loaded or failed validation
    Configuration {
        /// Error message
        message: String,
    },

    /// Host and port do not form a socket address
    InvalidAddress {
        /// Address as configured
        address: String,
        /// Parser message
        message: String,
    },
}

impl ServerError {
    /// Create a new configuration error
    #[must_use]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new invalid address error
    #[must_use]
    pub fn invalid_address<A: Into<String>, S: Into<String>>(address: A, message: S) -> Self {
        Self::InvalidAddress {
            address: address.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::InvalidAddress { address, message } => {
                write!(f, "Invalid server address '{address}': {message}")
            }
        }
    }
}

impl StdError for ServerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServerError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::configuration(err.to_string())
    }
}
