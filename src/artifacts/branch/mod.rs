//! Branch names, HEAD state and revision specifiers
//!
//! - `branch_name`: validated branch names
//! - `head`: HEAD attached to a branch or detached at a commit
//! - `revision`: parsing and resolving revision specifiers

pub mod branch_name;
pub mod head;
pub mod revision;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
pub const HEAD_RELATIVE_REGEX: &str = r"^HEAD~(\d+)$";
pub const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";
pub const HEAD_REF_NAME: &str = "HEAD";
pub const DEFAULT_BRANCH: &str = "master";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};
