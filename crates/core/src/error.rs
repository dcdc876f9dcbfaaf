//! Error types for token table operations
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for token operations
pub type TokenResult<T> = std::result::Result<T, TokenError>;

/// Failures raised by the token table.
///
/// Both variants are reported synchronously and leave the table unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Create was called with an id that is already live
    #[error("token already exists: {id}")]
    AlreadyExists {
        /// Offending token id
        id: String,
    },

    /// Write, Read or Drop was called with an id that is not live
    #[error("token not found: {id}")]
    NotFound {
        /// Missing token id
        id: String,
    },
}

impl TokenError {
    /// Build an `AlreadyExists` error for `id`.
    pub fn already_exists(id: impl Into<String>) -> Self {
        TokenError::AlreadyExists { id: id.into() }
    }

    /// Build a `NotFound` error for `id`.
    pub fn not_found(id: impl Into<String>) -> Self {
        TokenError::NotFound { id: id.into() }
    }

    /// The token id this error refers to.
    pub fn id(&self) -> &str {
        match self {
            TokenError::AlreadyExists { id } | TokenError::NotFound { id } => id,
        }
    }
}
