//! # tokenmngr Executor
//!
//! The public API for tokenmngr - an in-memory token store whose records carry
//! minimum-hash commitment state.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - In-process dispatcher over a [`TokenStore`]
//! - [`Command`]/[`Output`]/[`Error`] - The serializable command interface
//! - [`Server`]/[`Client`] - Newline-delimited JSON over TCP
//! - [`ServiceConfig`] - Service settings loaded from `tokenmngr.toml`
//!
//! ## Quick Start
//!
//! ```text
//! use tokenmngr_executor::{Command, Executor, Output};
//!
//! let executor = Executor::default();
//! executor.execute(Command::Create { id: "t1".into() })?;
//! let out = executor.execute(Command::Write {
//!     id: "t1".into(),
//!     name: "x".into(),
//!     low: 0,
//!     mid: 3,
//!     high: 6,
//! })?;
//! assert_eq!(out, Output::Partial(2));
//! ```
//!
//! ## Operations
//!
//! | Command | Output | Failure |
//! |---------|--------|---------|
//! | `Create` | `Bool(true)` | `TokenExists` |
//! | `Write` | `Partial(n)` | `TokenNotFound` |
//! | `Read` | `Final(n)` | `TokenNotFound` |
//! | `Drop` | `Bool(true)` | `TokenNotFound` |
//! | `Inspect` | `Token(info)` | `TokenNotFound` |
//! | `List` | `Ids(ids)` | - |
//! | `Ping` | `Pong { version }` | - |

#![warn(missing_docs)]

mod client;
mod command;
mod config;
mod error;
mod executor;
mod output;
mod server;
mod types;
pub mod wire;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use client::Client;
pub use command::Command;
pub use config::{ServiceConfig, CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT};
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use server::Server;
pub use types::TokenInfo;

// Re-export engine types so users don't need tokenmngr-engine directly
pub use tokenmngr_core::{nonce_hash, Domain, Token, TokenState};
pub use tokenmngr_engine::TokenStore;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
