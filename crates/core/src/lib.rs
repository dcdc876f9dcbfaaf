//! Core types for tokenmngr
//!
//! This crate defines the foundational pieces shared by the rest of the system:
//! - Token: the managed record (id, name, domain, derived state)
//! - Domain / TokenState: the two value groups embedded in a token
//! - nonce_hash: the keyed hash used to rank candidate nonces
//! - TokenError: failures raised by token table operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod hash;
pub mod token;

pub use error::{TokenError, TokenResult};
pub use hash::nonce_hash;
pub use token::{Domain, Token, TokenState};
