//! The token record and its embedded value groups.
//!
//! A token is created empty (only `id` set), populated by Write, refined by
//! Read, and removed by Drop. `state` is only meaningful relative to the
//! `name` and `domain` most recently written.

use serde::{Deserialize, Serialize};

/// Three-point numeric domain.
///
/// `[low, mid)` is scanned at write time and `[mid, high)` at read time. No
/// ordering between the bounds is enforced; an inverted pair simply yields an
/// empty range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    /// Lower bound (inclusive) of the write-time range
    pub low: u64,
    /// Split point: exclusive end of the write range, inclusive start of the read range
    pub mid: u64,
    /// Upper bound (exclusive) of the read-time range
    pub high: u64,
}

impl Domain {
    /// Create a domain from its three bounds.
    pub fn new(low: u64, mid: u64, high: u64) -> Self {
        Self { low, mid, high }
    }

    /// Nonces scanned by Write.
    pub fn lower(&self) -> std::ops::Range<u64> {
        self.low..self.mid
    }

    /// Nonces scanned by Read.
    pub fn upper(&self) -> std::ops::Range<u64> {
        self.mid..self.high
    }
}

/// Derived nonces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenState {
    /// Minimum-hash nonce over the lower range, set by Write
    pub partial: u64,
    /// Tournament winner between `partial` and the upper range, set by Read
    #[serde(rename = "final")]
    pub final_: u64,
}

/// A managed token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Caller-assigned unique identifier
    pub id: String,
    /// Hash key material
    pub name: String,
    /// Scan bounds
    pub domain: Domain,
    /// Derived nonces
    pub state: TokenState,
}

impl Token {
    /// Create an empty token: only `id` is set, every other field is zero.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
