//! Command handlers.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `token` | Create, Write, Read, Drop, Inspect |

pub mod token;
