//! Shared DTOs for the catalogfix workspace.
//!
//! # Design constraints
//! - Tables and change logs are plain data; fixers live in `catalogfix-domain`.
//! - Everything here round-trips through serde so callers can load and store it.
//! - Prefer adding optional fields over changing semantics.

pub mod change;
pub mod table;
pub mod value;

pub use change::{ChangeKind, ChangeLog, ChangeRecord, ChangeSection, HEADER_OFFSET};
pub use table::{Table, TableError};
pub use value::Value;
