//! Repository data structures and algorithms
//!
//! - `branch`: Branch names, HEAD state and revision parsing
//! - `core`: Shared escaping helpers for the on-disk formats
//! - `log`: Commit history traversal
//! - `objects`: Commit records and their ids
//! - `status`: Working tree status inspection

pub mod branch;
pub mod core;
pub mod log;
pub mod objects;
pub mod status;
