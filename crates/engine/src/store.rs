//! TokenStore: the locked token table
//!
//! ## Design
//!
//! One `parking_lot::Mutex` guards the whole `id -> Token` map. Every
//! operation takes the lock, runs to completion (scans included) and releases
//! it, so operations on any ids are strictly serialized and no caller can see
//! a half-written record. A long scan blocks unrelated ids too.
//!
//! ## State machine
//!
//! ```text
//! Absent --create--> Empty --write--> Partial-set --read--> Final-set
//!                                        ^   |                  |
//!                                        +---+ write            | write (final reset)
//!                                        ^----------------------+
//! any live state --drop--> Absent
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tokenmngr_engine::TokenStore;
//!
//! let store = TokenStore::new();
//! store.create("t1")?;
//! let partial = store.write("t1", "x", 0, 3, 6)?;
//! let final_ = store.read("t1")?;
//! assert_eq!((partial, final_), (2, 2));
//! store.drop_token("t1")?;
//! # Ok::<(), tokenmngr_core::TokenError>(())
//! ```

use std::collections::HashMap;

use parking_lot::Mutex;
use tokenmngr_core::{Domain, Token, TokenError, TokenResult};
use tracing::debug;

use crate::scan::{min_hash_scan, Candidate};

/// In-memory token table guarded by a single lock.
#[derive(Debug, Default)]
pub struct TokenStore {
    tokens: Mutex<HashMap<String, Token>>,
}

impl TokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an empty token under `id`.
    ///
    /// Fails with `AlreadyExists` if `id` is live; the existing record is untouched.
    pub fn create(&self, id: &str) -> TokenResult<()> {
        let mut tokens = self.tokens.lock();
        if tokens.contains_key(id) {
            return Err(TokenError::already_exists(id));
        }
        let token = Token::new(id);
        log_token("create", &token);
        tokens.insert(id.to_string(), token);
        Ok(())
    }

    /// Overwrite name and domain, then recompute `partial` from scratch.
    ///
    /// Scans `[low, mid)` for the minimum-hash nonce, seeded with `low` so an
    /// empty range yields `low`. `final` is reset to 0. Returns the new partial.
    pub fn write(&self, id: &str, name: &str, low: u64, mid: u64, high: u64) -> TokenResult<u64> {
        let mut tokens = self.tokens.lock();
        let token = tokens
            .get_mut(id)
            .ok_or_else(|| TokenError::not_found(id))?;

        token.name = name.to_string();
        token.domain = Domain::new(low, mid, high);

        let best = min_hash_scan(&token.name, token.domain.lower(), Candidate::unhashed(low));
        token.state.partial = best.nonce;
        token.state.final_ = 0;

        log_token("write", token);
        Ok(token.state.partial)
    }

    /// Reconcile the stored partial against a fresh scan of `[mid, high)`.
    ///
    /// The scan is seeded with nonce 0 and a maximal hash, so an empty upper
    /// range can never displace the partial. The challenger wins only with a
    /// strictly smaller hash. Returns the new `final`.
    pub fn read(&self, id: &str) -> TokenResult<u64> {
        let mut tokens = self.tokens.lock();
        let token = tokens
            .get_mut(id)
            .ok_or_else(|| TokenError::not_found(id))?;

        let challenger = min_hash_scan(&token.name, token.domain.upper(), Candidate::unhashed(0));
        let incumbent = Candidate::hashed(&token.name, token.state.partial);

        token.state.final_ = if challenger.hash < incumbent.hash {
            challenger.nonce
        } else {
            incumbent.nonce
        };

        log_token("read", token);
        Ok(token.state.final_)
    }

    /// Remove the token under `id`.
    pub fn drop_token(&self, id: &str) -> TokenResult<()> {
        let mut tokens = self.tokens.lock();
        match tokens.remove(id) {
            Some(token) => {
                log_token("drop", &token);
                Ok(())
            }
            None => Err(TokenError::not_found(id)),
        }
    }

    // ========== Read-only queries ==========

    /// Snapshot of the token under `id`.
    pub fn get(&self, id: &str) -> Option<Token> {
        self.tokens.lock().get(id).cloned()
    }

    /// Whether `id` is live.
    pub fn contains(&self, id: &str) -> bool {
        self.tokens.lock().contains_key(id)
    }

    /// All live ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.tokens.lock().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of live tokens.
    pub fn len(&self) -> usize {
        self.tokens.lock().len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.lock().is_empty()
    }
}

fn log_token(op: &'static str, token: &Token) {
    debug!(
        target: "tokenmngr::store",
        op,
        id = %token.id,
        name = %token.name,
        low = token.domain.low,
        mid = token.domain.mid,
        high = token.domain.high,
        partial = token.state.partial,
        final_ = token.state.final_,
        "token updated"
    );
}
