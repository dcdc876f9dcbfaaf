//! Command enum defining all tokenmngr operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for the wire protocol
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// # Example
///
/// ```ignore
/// use tokenmngr_executor::Command;
///
/// let cmd = Command::Write {
///     id: "t1".into(),
///     name: "alice".into(),
///     low: 0,
///     mid: 5,
///     high: 10,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Token lifecycle (4) ====================
    /// Insert an empty token.
    /// Returns: `Output::Bool(true)`
    Create {
        /// Caller-assigned token id
        id: String,
    },

    /// Set name and domain, recompute the partial nonce.
    /// Returns: `Output::Partial`
    Write {
        /// Token id
        id: String,
        /// Hash key material
        name: String,
        /// Start of the write-time range (inclusive)
        low: u64,
        /// End of the write-time range, start of the read-time range
        mid: u64,
        /// End of the read-time range (exclusive)
        high: u64,
    },

    /// Reconcile the partial nonce against the upper range.
    /// Returns: `Output::Final`
    Read {
        /// Token id
        id: String,
    },

    /// Remove a token.
    /// Returns: `Output::Bool(true)`
    Drop {
        /// Token id
        id: String,
    },

    // ==================== Introspection ====================
    /// Snapshot a token without changing it.
    /// Returns: `Output::Token`
    Inspect {
        /// Token id
        id: String,
    },

    /// List live token ids.
    /// Returns: `Output::Ids`
    List,

    /// Liveness check.
    /// Returns: `Output::Pong`
    Ping,
}

impl Command {
    /// Short operation name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Create { .. } => "create",
            Command::Write { .. } => "write",
            Command::Read { .. } => "read",
            Command::Drop { .. } => "drop",
            Command::Inspect { .. } => "inspect",
            Command::List => "list",
            Command::Ping => "ping",
        }
    }
}
