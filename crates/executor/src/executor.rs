//! The Executor - single entry point to the token engine.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate store operations and converts results to outputs.

use std::sync::Arc;

use tokenmngr_engine::TokenStore;

use crate::handlers::token;
use crate::{Command, Output, Result};

/// The command executor - single entry point to the token engine.
///
/// The Executor is **stateless**: it holds a reference to the token store but
/// maintains no state of its own. Cloning is cheap and every clone dispatches
/// to the same table.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Executor {
    store: Arc<TokenStore>,
}

impl Executor {
    /// Create a new executor over an existing store.
    pub fn new(store: Arc<TokenStore>) -> Self {
        Self { store }
    }

    /// The store this executor dispatches to.
    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    /// Execute a single command.
    ///
    /// Runs synchronously: Write and Read scan their ranges to completion
    /// before returning.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Create { id } => token::create(&self.store, id),
            Command::Write {
                id,
                name,
                low,
                mid,
                high,
            } => token::write(&self.store, id, name, low, mid, high),
            Command::Read { id } => token::read(&self.store, id),
            Command::Drop { id } => token::drop_token(&self.store, id),
            Command::Inspect { id } => token::inspect(&self.store, id),
            Command::List => Ok(Output::Ids(self.store.ids())),
            Command::Ping => Ok(Output::Pong {
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
        }
    }
}

impl Default for Executor {
    /// An executor over a fresh, empty store.
    fn default() -> Self {
        Self::new(Arc::new(TokenStore::new()))
    }
}
