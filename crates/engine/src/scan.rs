//! Minimum-hash scan
//!
//! Walks a half-open nonce range in ascending order and keeps the nonce with
//! the strictly smallest `nonce_hash`. Ties keep the earlier nonce. An empty
//! range returns the seed unchanged, which is how both callers express
//! "no candidate from this side".
//!
//! Iterating a `Range<u64>` never computes `end + 1`, so a range ending at
//! `u64::MAX` terminates without wraparound.

use std::ops::Range;

use tokenmngr_core::nonce_hash;

/// A nonce together with its hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Candidate nonce
    pub nonce: u64,
    /// `nonce_hash(name, nonce)`, or `u64::MAX` for a seed that was never hashed
    pub hash: u64,
}

impl Candidate {
    /// A seed that any real hash below `u64::MAX` will beat.
    pub fn unhashed(nonce: u64) -> Self {
        Self {
            nonce,
            hash: u64::MAX,
        }
    }

    /// Hash `nonce` under `name`.
    pub fn hashed(name: &str, nonce: u64) -> Self {
        Self {
            nonce,
            hash: nonce_hash(name, nonce),
        }
    }
}

/// Return the minimum-hash candidate of `range`, starting from `seed`.
pub fn min_hash_scan(name: &str, range: Range<u64>, seed: Candidate) -> Candidate {
    let mut best = seed;
    for nonce in range {
        let hash = nonce_hash(name, nonce);
        if hash < best.hash {
            best = Candidate { nonce, hash };
        }
    }
    best
}
