//! Keyed hash used to rank candidate nonces.
//!
//! The input is the text `"<name> <nonce>"` with the nonce in decimal. The
//! output is the first 8 bytes of its SHA-256 digest, read big-endian. The
//! value is only ever compared against other outputs, never trusted as a
//! security primitive.

use sha2::{Digest, Sha256};

/// Hash `(name, nonce)` into a 64-bit ordering key.
///
/// Deterministic across calls and across processes: there is no salt.
pub fn nonce_hash(name: &str, nonce: u64) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(b" ");
    hasher.update(nonce.to_string().as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hash_determinism() {
        let first = nonce_hash("alice", 42);
        for _ in 0..10 {
            assert_eq!(nonce_hash("alice", 42), first);
        }
    }

    #[test]
    fn test_hash_known_values() {
        // SHA-256("x 0"), SHA-256("x 2") and SHA-256("alice 8"), first 8 bytes big-endian
        assert_eq!(nonce_hash("x", 0), 4390947951774637762);
        assert_eq!(nonce_hash("x", 2), 1707864713114298789);
        assert_eq!(nonce_hash("alice", 8), 165268514761095947);
    }

    #[test]
    fn test_hash_matches_formatted_input() {
        let mut hasher = Sha256::new();
        hasher.update(format!("{} {}", "bob", 7).as_bytes());
        let digest = hasher.finalize();
        let expected = u64::from_be_bytes([
            digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6], digest[7],
        ]);
        assert_eq!(nonce_hash("bob", 7), expected);
    }

    #[test]
    fn test_hash_differs_for_different_inputs() {
        assert_ne!(nonce_hash("x", 0), nonce_hash("x", 1));
        assert_ne!(nonce_hash("x", 0), nonce_hash("y", 0));
    }

    #[test]
    fn test_hash_separator_is_significant() {
        // "a 12" and "a1 2" must not collide just because the bytes are close
        assert_ne!(nonce_hash("a", 12), nonce_hash("a1", 2));
    }

    #[test]
    fn test_hash_accepts_extremes() {
        let _ = nonce_hash("", 0);
        let _ = nonce_hash("", u64::MAX);
        let _ = nonce_hash("名前 with spaces", u64::MAX - 1);
    }

    proptest! {
        #[test]
        fn prop_hash_is_pure(name in ".{0,32}", nonce in any::<u64>()) {
            prop_assert_eq!(nonce_hash(&name, nonce), nonce_hash(&name, nonce));
        }
    }
}
