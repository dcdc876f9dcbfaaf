//! tokenmngr - in-memory token store with minimum-hash commitment state
//!
//! Each token carries a name and a numeric domain `(low, mid, high)`. Writing a
//! token scans `[low, mid)` for the nonce with the smallest keyed hash (the
//! *partial*). Reading it scans `[mid, high)` and keeps whichever of the two
//! candidates hashes lower (the *final*).
//!
//! # Quick Start
//!
//! ```
//! use tokenmngr::{Command, Executor, Output};
//!
//! let executor = Executor::default();
//! executor.execute(Command::Create { id: "t1".into() })?;
//!
//! let partial = executor.execute(Command::Write {
//!     id: "t1".into(),
//!     name: "x".into(),
//!     low: 0,
//!     mid: 2,
//!     high: 7,
//! })?;
//! assert_eq!(partial, Output::Partial(0));
//!
//! let final_ = executor.execute(Command::Read { id: "t1".into() })?;
//! assert_eq!(final_, Output::Final(6));
//! # Ok::<(), tokenmngr::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], either in process or via the
//! TCP [`Server`] and its [`Client`]. The engine and core crates are
//! implementation details.

// Re-export the public API from tokenmngr-executor
pub use tokenmngr_executor::*;
