//! Core repository components
//!
//! - `database`: Commit store, one record file per commit id
//! - `index`: Staging area for the next commit
//! - `refs`: Branch registry and HEAD
//! - `repository`: The engine tying the other components together
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
