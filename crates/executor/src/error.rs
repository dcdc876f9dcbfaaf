//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: They cross the wire unchanged, so a remote client sees
//!   the same variant the server produced

use serde::{Deserialize, Serialize};
use tokenmngr_core::TokenError;

/// Command execution errors.
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Token | `TokenExists`, `TokenNotFound` | Table preconditions |
/// | Validation | `InvalidInput` | Bad request or config |
/// | System | `Io`, `Serialization`, `Internal` | Infrastructure errors |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Token Errors ====================
    /// Create on a live id
    #[error("token already exists: {id}")]
    TokenExists {
        /// Offending token id
        id: String,
    },

    /// Any other operation on a missing id
    #[error("token not found: {id}")]
    TokenNotFound {
        /// Missing token id
        id: String,
    },

    // ==================== Validation Errors ====================
    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong
        reason: String,
    },

    // ==================== System Errors ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying error message
        reason: String,
    },

    /// Serialization error
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying error message
        reason: String,
    },

    /// Internal error (bug or protocol violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the failure
        reason: String,
    },
}

impl From<TokenError> for Error {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::AlreadyExists { id } => Error::TokenExists { id },
            TokenError::NotFound { id } => Error::TokenNotFound { id },
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidInput {
            reason: e.to_string(),
        }
    }
}
