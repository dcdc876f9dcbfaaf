//! Token engine for tokenmngr
//!
//! This crate owns the token table and the search that derives token state:
//! - TokenStore: the locked id -> Token table with Create/Write/Read/Drop
//! - scan: exhaustive minimum-hash search over a nonce range
//!
//! The engine knows nothing about transports or encodings. Callers hold a
//! store (usually behind an `Arc`) and invoke its operations directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod scan;
pub mod store;

pub use scan::{min_hash_scan, Candidate};
pub use store::TokenStore;
