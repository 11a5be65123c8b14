//! HEAD state
//!
//! HEAD is either attached to a branch (`ref: refs/heads/<branch>` in
//! `.git/HEAD`) or detached at a raw commit id (the bare id in `.git/HEAD`).

use crate::artifacts::branch::SYMREF_REGEX;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static SYMREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SYMREF_REGEX).expect("symref pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// Symbolic reference to a branch, which may not have any commits yet
    Attached(BranchName),
    /// Raw commit id with no associated branch
    Detached(ObjectId),
}

impl Default for Head {
    fn default() -> Self {
        Head::Attached(BranchName::default_branch())
    }
}

impl Head {
    /// Parse the content of a HEAD file; `source` is only used for errors
    pub fn parse(content: &str, source: &Path) -> RepositoryResult<Self> {
        let content = content.trim();
        let corrupted = |reason: String| RepositoryError::CorruptedData {
            path: source.to_path_buf(),
            reason,
        };

        if let Some(symref_match) = SYMREF.captures(content) {
            let branch_name = BranchName::try_parse(symref_match[1].to_string())
                .map_err(|e| corrupted(e.to_string()))?;
            return Ok(Head::Attached(branch_name));
        }

        ObjectId::try_parse(content.to_string())
            .map(Head::Detached)
            .map_err(|_| corrupted(format!("unrecognised HEAD content '{content}'")))
    }

    /// Content written to `.git/HEAD`
    pub fn to_ref_string(&self) -> String {
        match self {
            Head::Attached(branch_name) => format!("ref: refs/heads/{branch_name}"),
            Head::Detached(oid) => oid.to_string(),
        }
    }

    /// The current branch, absent when detached
    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            Head::Attached(branch_name) => Some(branch_name),
            Head::Detached(_) => None,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached(_))
    }
}
