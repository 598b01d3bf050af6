//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The taxonomy mirrors the three failure classes the UI distinguishes:
/// transport failures, server-reported failures, and client-side validation
/// failures. Errors are `Clone` so a cached fetch failure can be handed to
/// every coalesced reader.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Network or transport failure (connect error, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server responded with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code reported by the backend.
        status: u16,
        /// Best-effort message extracted from the response body.
        message: String,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client-side validation failure.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Server { .. } => "SERVER_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether a retry of the same operation could plausibly succeed.
    ///
    /// Transport failures and 5xx responses are retryable; validation and
    /// 4xx responses are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Transport(String::new()).error_code(),
            "TRANSPORT_ERROR"
        );
        assert_eq!(
            AppError::Server {
                status: 500,
                message: String::new()
            }
            .error_code(),
            "SERVER_ERROR"
        );
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::Config(String::new()).error_code(), "CONFIG_ERROR");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Transport("connection refused".into()).to_string(),
            "Transport error: connection refused"
        );
        assert_eq!(
            AppError::Server {
                status: 422,
                message: "bad payload".into()
            }
            .to_string(),
            "Server error (422): bad payload"
        );
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
    }

    #[test]
    fn test_retryability() {
        assert!(AppError::Transport("timeout".into()).is_retryable());
        assert!(
            AppError::Server {
                status: 503,
                message: String::new()
            }
            .is_retryable()
        );
        assert!(
            !AppError::Server {
                status: 404,
                message: String::new()
            }
            .is_retryable()
        );
        assert!(!AppError::Validation(String::new()).is_retryable());
    }
}
