//! Commit history traversal for `log`
//!
//! - `rev_list`: lazy walk along parent links
//!
//! `CommitLog` adapts a walk into the summaries `log` reports: id, date and
//! message, child to root.

pub mod rev_list;

use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub oid: ObjectId,
    pub message: String,
    pub date: String,
}

impl From<(ObjectId, Commit)> for CommitSummary {
    fn from((oid, commit): (ObjectId, Commit)) -> Self {
        CommitSummary {
            oid,
            message: commit.message().to_string(),
            date: commit.timestamp().to_string(),
        }
    }
}

#[derive(Clone, new)]
pub struct CommitLog<'d> {
    rev_list: RevList<'d>,
}

impl Iterator for CommitLog<'_> {
    type Item = RepositoryResult<CommitSummary>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rev_list
            .next()
            .map(|entry| entry.map(CommitSummary::from))
    }
}
