//! # Catalog Errors
//!
//! Error types for upstream catalog fetches.
//!
//! Every variant is scoped to one company's fetch. The aggregator recovers
//! from all of them by excluding that company from the candidate set.
//!
//! # Examples
//!
//! ```
//! use product_aggregator::infrastructure::catalog::error::CatalogError;
//!
//! let error = CatalogError::timeout_with_duration("request timed out", 500);
//! assert!(error.is_unavailable());
//!
//! let error = CatalogError::malformed("expected array");
//! assert!(error.is_malformed());
//! ```

use thiserror::Error;

/// Error type for upstream catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Request exceeded its time budget.
    #[error("catalog timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("catalog connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Upstream answered with a non-2xx status.
    #[error("catalog returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("catalog malformed response: {message}")]
    Malformed {
        /// Error message.
        message: String,
    },

    /// The request URL could not be built.
    #[error("catalog invalid url: {message}")]
    InvalidUrl {
        /// Error message.
        message: String,
    },

    /// Internal client error.
    #[error("catalog internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl CatalogError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates a malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates an invalid URL error.
    #[must_use]
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if upstream could not be reached or refused the request
    /// (timeout, connection failure, non-2xx status).
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::Status { .. }
        )
    }

    /// Returns true if upstream answered but the body was unusable.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns true if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns the HTTP status, if upstream answered with one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns a short label for log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Connection { .. } => "connection",
            Self::Status { .. } => "status",
            Self::Malformed { .. } => "malformed",
            Self::InvalidUrl { .. } => "invalid_url",
            Self::Internal { .. } => "internal",
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
