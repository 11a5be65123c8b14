//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `rm`: Unstage files and delete them from the working directory
//! - `commit`: Create a new commit from the index
//! - `status`: Classify working tree changes
//! - `reset`: Move HEAD and restore its snapshot
//! - `log`: Walk commit history
//! - `checkout`: Switch commits or branches, or restore single files
//! - `branch`: Create, remove and list branches
//! - `merge`: Overlay a branch onto HEAD and commit the result

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
