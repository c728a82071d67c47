//! Error types for acrq.
//!
//! All fallible operations in this crate return [`Result`]. Errors carry
//! enough context to be printed directly at the CLI boundary; no operation
//! retries internally.

use thiserror::Error;


/// Main error type for registry query operations.
#[derive(Error, Debug)]
pub enum AcrError {
    /// Configuration errors (missing or invalid registry endpoint)
    #[error("{message}")]
    Config { message: String },

    /// Resource not found errors (404)
    #[error("{resource_type} not found: {name}")]
    NotFound { resource_type: String, name: String },

    /// Authentication errors (401, 403, missing or expired credentials)
    #[error("Authentication error (status: {status_code:?}): {message}")]
    Authentication {
        message: String,
        status_code: Option<u16>,
    },

    /// Network-related errors (connection, timeout, unexpected status)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid caller input (bad sort key, empty repository name)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Result type alias for registry query operations.
pub type Result<T> = std::result::Result<T, AcrError>;

impl AcrError {
    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libacrq::error::AcrError;
    ///
    /// let err = AcrError::config("endpoint not set");
    /// assert!(matches!(err, AcrError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a new not found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libacrq::error::AcrError;
    ///
    /// let err = AcrError::not_found("repository", "myrepo");
    /// assert!(matches!(err, AcrError::NotFound { .. }));
    /// ```
    pub fn not_found<S: Into<String>>(resource_type: S, name: S) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Creates a new authentication error.
    pub fn authentication<S: Into<String>>(message: S, status_code: Option<u16>) -> Self {
        Self::Authentication {
            message: message.into(),
            status_code,
        }
    }

    /// Creates a new network error.
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libacrq::error::AcrError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    /// let err = AcrError::network_with_source("failed to connect", io_err);
    /// assert!(matches!(err, AcrError::Network { .. }));
    /// ```
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new invalid argument error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libacrq::error::AcrError;
    ///
    /// let err = AcrError::invalid_argument("Bad value: size");
    /// assert!(matches!(err, AcrError::InvalidArgument { .. }));
    /// ```
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
