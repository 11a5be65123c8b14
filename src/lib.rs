//! A small snapshot-based version control engine.
//!
//! A [`Repository`] records full-file snapshots of a working directory as
//! linked commit records under `.git/`, keeps named branches pointing into
//! that history and stages pending changes in an index. The porcelain
//! operations (`init`, `add`, `commit`, `checkout`, ...) are methods on
//! [`Repository`]; the `twig` binary is a thin CLI over them.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::repository::Repository;
pub use artifacts::branch::branch_name::BranchName;
pub use artifacts::branch::head::Head;
pub use artifacts::branch::revision::Revision;
pub use artifacts::log::CommitSummary;
pub use artifacts::objects::object_id::ObjectId;
pub use artifacts::status::StatusInfo;
pub use errors::{RepositoryError, RepositoryResult};
