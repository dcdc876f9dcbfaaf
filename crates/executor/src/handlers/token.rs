//! Token command handlers.
//!
//! Thin adapters from store results to [`Output`] values. All locking and
//! search logic lives in the engine.

use std::sync::Arc;

use tokenmngr_engine::TokenStore;

use crate::types::TokenInfo;
use crate::{Error, Output, Result};

/// Handle Create command.
pub fn create(store: &Arc<TokenStore>, id: String) -> Result<Output> {
    store.create(&id)?;
    Ok(Output::Bool(true))
}

/// Handle Write command.
pub fn write(
    store: &Arc<TokenStore>,
    id: String,
    name: String,
    low: u64,
    mid: u64,
    high: u64,
) -> Result<Output> {
    let partial = store.write(&id, &name, low, mid, high)?;
    Ok(Output::Partial(partial))
}

/// Handle Read command.
pub fn read(store: &Arc<TokenStore>, id: String) -> Result<Output> {
    let final_ = store.read(&id)?;
    Ok(Output::Final(final_))
}

/// Handle Drop command.
pub fn drop_token(store: &Arc<TokenStore>, id: String) -> Result<Output> {
    store.drop_token(&id)?;
    Ok(Output::Bool(true))
}

/// Handle Inspect command.
pub fn inspect(store: &Arc<TokenStore>, id: String) -> Result<Output> {
    store
        .get(&id)
        .map(|token| Output::Token(TokenInfo::from(token)))
        .ok_or(Error::TokenNotFound { id })
}
