//! Custom error types for the application.

use thiserror::Error;

/// Credential marker errors for localStorage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Refused to store an empty token.
    #[error("token must not be empty")]
    EmptyToken,
    /// Failed to save to localStorage.
    #[error("failed to save token to localStorage")]
    SaveFailed,
    /// Failed to remove from localStorage.
    #[error("failed to remove token from localStorage")]
    RemoveFailed,
}
