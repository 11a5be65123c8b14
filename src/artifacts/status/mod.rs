//! Working tree status inspection
//!
//! Compares the working directory, the index and the HEAD commit's snapshot
//! and sorts every path into at most one of four buckets.
//!
//! - `status_info`: the classification result and its computation

pub mod status_info;

pub use status_info::{Status, StatusInfo};
