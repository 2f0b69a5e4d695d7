//! Error types and result aliases for Skilldock operations.
//!
//! Provides a unified error type that covers all failure conditions in the
//! registry access layer with actionable error messages.
//!
//! The enum is `Clone` on purpose: the request deduplicator delivers a single
//! failure to every caller attached to an in-flight request, so errors carry
//! owned message strings rather than boxed sources.

use thiserror::Error;

/// Unified error type for all Skilldock operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    // Registry errors
    #[error("Registry returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("{message}")]
    Timeout { message: String },

    // Response decoding errors
    #[error("Failed to decode registry response: {message}")]
    Decode { message: String },
}

/// Result type alias for Skilldock operations
pub type DockResult<T> = Result<T, DockError>;

impl DockError {
    /// Create a network error from any error type
    pub fn network<E: std::fmt::Display>(message: &str, source: E) -> Self {
        Self::Network {
            message: format!("{}: {}", message, source),
        }
    }

    /// Create a decode error from any error type
    pub fn decode<E: std::fmt::Display>(message: &str, source: E) -> Self {
        Self::Decode {
            message: format!("{}: {}", message, source),
        }
    }

    /// Check if this error is recoverable by retrying later
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DockError::Network { .. } | DockError::Timeout { .. }
        )
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            DockError::Network { .. } => Some("Check your internet connection and try again"),
            DockError::Timeout { .. } => {
                Some("The registry is slow to respond, try again in a moment")
            }
            DockError::HttpStatus { status } if *status >= 500 => {
                Some("The registry is having problems, try again later")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let err = DockError::network("Failed to fetch plugins", "connection refused");
        assert_eq!(
            err.to_string(),
            "Network error: Failed to fetch plugins: connection refused"
        );
    }

    #[test]
    fn test_http_status_display() {
        let err = DockError::HttpStatus { status: 503 };
        assert_eq!(err.to_string(), "Registry returned HTTP 503");
    }

    #[test]
    fn test_recoverable() {
        assert!(DockError::Network { message: "down".into() }.is_recoverable());
        assert!(DockError::Timeout { message: "slow".into() }.is_recoverable());
        assert!(!DockError::HttpStatus { status: 404 }.is_recoverable());
    }

    #[test]
    fn test_suggestions() {
        assert!(DockError::Network { message: "down".into() }.suggestion().is_some());
        assert!(DockError::HttpStatus { status: 502 }.suggestion().is_some());
        assert!(DockError::HttpStatus { status: 404 }.suggestion().is_none());
    }

    #[test]
    fn test_errors_are_cloneable() {
        let err = DockError::Timeout { message: "request timed out".into() };
        assert_eq!(err.clone(), err);
    }
}
