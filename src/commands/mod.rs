//! Command implementations
//!
//! - `porcelain`: user-facing version control operations (init, add, commit, ...)
//!
//! Every command is an inherent method on
//! [`Repository`](crate::areas::repository::Repository). Commands return
//! data, never formatted text; rendering belongs to the binary.

pub mod porcelain;
