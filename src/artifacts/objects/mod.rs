//! Commit records and their identifiers
//!
//! - `object_id`: 40-character SHA-1 identifiers
//! - `commit`: the immutable commit record, its snapshot and its text codec

pub mod commit;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
