//! Wire-facing value types.

use serde::{Deserialize, Serialize};
use tokenmngr_core::Token;

/// Flat snapshot of a token, as returned by `Command::Inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token id
    pub id: String,
    /// Hash key material
    pub name: String,
    /// Domain lower bound
    pub low: u64,
    /// Domain split point
    pub mid: u64,
    /// Domain upper bound
    pub high: u64,
    /// Partial nonce
    pub partial: u64,
    /// Final nonce
    #[serde(rename = "final")]
    pub final_: u64,
}

impl From<Token> for TokenInfo {
    fn from(token: Token) -> Self {
        Self {
            id: token.id,
            name: token.name,
            low: token.domain.low,
            mid: token.domain.mid,
            high: token.domain.high,
            partial: token.state.partial,
            final_: token.state.final_,
        }
    }
}
