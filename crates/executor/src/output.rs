//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. The mapping is fixed:
//! the same command always produces the same variant, though the values
//! depend on table state.

use serde::{Deserialize, Serialize};

use crate::types::TokenInfo;

/// Successful command execution results.
///
/// ```text
/// match executor.execute(Command::Read { id })? {
///     Output::Final(n) => println!("Final: {}", n),
///     _ => unreachable!("Read always returns Final"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Success indicator (Create, Drop)
    Bool(bool),

    /// Partial nonce computed by Write
    Partial(u64),

    /// Final nonce computed by Read
    Final(u64),

    /// Token snapshot (Inspect)
    Token(TokenInfo),

    /// Live token ids (List)
    Ids(Vec<String>),

    /// Ping response
    Pong {
        /// Service version string.
        version: String,
    },
}
