//! Error types for the chainstatus crates

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for chainstatus operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {message}")]
    #[diagnostic(code(chainstatus::config::invalid))]
    Configuration {
        /// The error message describing the configuration issue
        message: String,
    },

    /// A stored repository password could not be decrypted
    #[error("Failed to decrypt credentials: {message}")]
    #[diagnostic(
        code(chainstatus::credentials::decrypt),
        help("Re-enter the repository password so it is stored with the current key")
    )]
    Decryption {
        /// The error message from the encryption service
        message: String,
    },

    /// No `owner/name` identity could be derived for a repository
    #[error("Cannot derive repository identity from '{value}': {reason}")]
    #[diagnostic(code(chainstatus::repository::invalid))]
    InvalidRepository {
        /// The identifier or URL that was rejected
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The commit status call failed in transport or was rejected by the API
    #[error("Commit status request for {repository}@{sha} failed")]
    #[diagnostic(code(chainstatus::github::status_request))]
    StatusRequest {
        /// Repository identity in `owner/name` form
        repository: String,
        /// The commit the status was meant for
        sha: String,
        /// The underlying client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create a configuration error with a message
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a decryption error with a message
    pub fn decryption(message: impl Into<String>) -> Self {
        Self::Decryption {
            message: message.into(),
        }
    }

    /// Create an invalid repository error
    pub fn invalid_repository(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRepository {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a status request error wrapping the client's error
    pub fn status_request(
        repository: impl Into<String>,
        sha: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::StatusRequest {
            repository: repository.into(),
            sha: sha.into(),
            source: source.into(),
        }
    }
}

/// Result type for chainstatus operations
pub type Result<T> = std::result::Result<T, Error>;
