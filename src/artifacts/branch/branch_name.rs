use crate::artifacts::branch::{DEFAULT_BRANCH, HEAD_REF_NAME, INVALID_BRANCH_NAME_REGEX};
use crate::errors::{RepositoryError, RepositoryResult};
use regex::Regex;
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(INVALID_BRANCH_NAME_REGEX).expect("branch name pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> RepositoryResult<Self> {
        if name.is_empty() || name == HEAD_REF_NAME || INVALID_BRANCH_NAME.is_match(&name) {
            return Err(RepositoryError::InvalidBranchName(name));
        }

        Ok(Self(name))
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
