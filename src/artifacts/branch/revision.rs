use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{HEAD_REF_NAME, HEAD_RELATIVE_REGEX, REF_ALIASES};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use derive_new::new;
use regex::Regex;
use std::sync::LazyLock;

static HEAD_RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HEAD_RELATIVE_REGEX).expect("relative revision pattern is a valid regex")
});

/// A revision specifier, parsed once and resolved by [`RevisionContext`].
///
/// Supported formats:
/// - `HEAD` (or its alias `@`): the current HEAD commit
/// - `HEAD~<n>`: the Nth ancestor of HEAD, following parent links
/// - a 40-character hexadecimal commit id
/// - a branch name
///
/// A full-length id that is not in the commit store is still tried as a
/// branch name, spelled as given, during resolution before it is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    HeadRelative(usize),
    RawId(String),
    BranchName(BranchName),
}

impl Revision {
    pub fn try_parse(revision: &str) -> RepositoryResult<Revision> {
        let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);

        if resolved_name == HEAD_REF_NAME {
            return Ok(Revision::Head);
        }

        if let Some(caps) = HEAD_RELATIVE.captures(resolved_name) {
            let generations = caps[1]
                .parse::<usize>()
                .map_err(|_| RepositoryError::InvalidRevision(revision.to_string()))?;
            return Ok(Revision::HeadRelative(generations));
        }

        if ObjectId::looks_like_oid(resolved_name) {
            return Ok(Revision::RawId(resolved_name.to_string()));
        }

        BranchName::try_parse(resolved_name.to_string())
            .map(Revision::BranchName)
            .map_err(|_| RepositoryError::InvalidRevision(revision.to_string()))
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Head => write!(f, "{HEAD_REF_NAME}"),
            Revision::HeadRelative(generations) => write!(f, "{HEAD_REF_NAME}~{generations}"),
            Revision::RawId(token) => write!(f, "{token}"),
            Revision::BranchName(branch_name) => write!(f, "{branch_name}"),
        }
    }
}

/// Resolves revisions against the commit store and the branch registry
#[derive(new)]
pub struct RevisionContext<'r> {
    database: &'r Database,
    refs: &'r Refs,
}

impl RevisionContext<'_> {
    /// Resolve `revision` to a commit id; `head` is the current HEAD commit,
    /// absent while the current branch has no commits.
    pub fn resolve(
        &self,
        revision: &Revision,
        head: Option<&ObjectId>,
    ) -> RepositoryResult<ObjectId> {
        let oid = match revision {
            Revision::Head => head
                .cloned()
                .ok_or_else(|| RepositoryError::InvalidRevision(HEAD_REF_NAME.to_string()))?,
            Revision::HeadRelative(generations) => self.ancestor(head, *generations)?,
            Revision::RawId(token) => match self.stored_commit(token) {
                Some(oid) => oid,
                None => self.resolve_branch(token)?,
            },
            Revision::BranchName(branch_name) => self.resolve_branch(branch_name.as_ref())?,
        };

        tracing::debug!(%revision, commit = %oid, "resolved revision");
        Ok(oid)
    }

    /// Walk `generations` parent links from `head`
    pub fn ancestor(
        &self,
        head: Option<&ObjectId>,
        generations: usize,
    ) -> RepositoryResult<ObjectId> {
        let mut available = 0;

        if let Some(head) = head {
            for entry in self.database.walk_parents(head.clone()) {
                let (oid, _) = entry?;
                if available == generations {
                    return Ok(oid);
                }
                available += 1;
            }
        }

        Err(RepositoryError::InsufficientHistory {
            requested: generations,
            available,
        })
    }

    /// The commit a full-length id names, if the store holds it
    pub fn stored_commit(&self, token: &str) -> Option<ObjectId> {
        ObjectId::try_parse(token.to_string())
            .ok()
            .filter(|oid| self.database.contains(oid))
    }

    fn resolve_branch(&self, name: &str) -> RepositoryResult<ObjectId> {
        let invalid = || RepositoryError::InvalidRevision(name.to_string());
        let branch_name = BranchName::try_parse(name.to_string()).map_err(|_| invalid())?;

        match self.refs.read_branch(&branch_name) {
            Ok(oid) => Ok(oid),
            Err(RepositoryError::BranchMissing(_)) => Err(invalid()),
            Err(e) => Err(e),
        }
    }
}
