//! Commit record
//!
//! A commit is an immutable record holding a message, a rendered timestamp,
//! an optional parent and the full snapshot of tracked files.
//!
//! ## Format
//!
//! On disk (`.git/commits/<id>`):
//! ```text
//! Message: <message>
//! Date: <date>
//! Parent: <parent-id>
//!
//! <path>: <content>
//! <path>: <content>
//! ```
//!
//! Header lines may appear in any order and `Parent` is omitted for the
//! root commit. Every key and value is escaped with
//! [`crate::artifacts::core::escape`], so file contents and messages may span
//! several lines.

use crate::artifacts::core::{escape, split_field};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use derive_new::new;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Tracked path to full file content
pub type Snapshot = BTreeMap<PathBuf, String>;

/// Environment variable pinning the commit timestamp
pub const COMMIT_DATE_ENV: &str = "TWIG_COMMIT_DATE";

const MESSAGE_HEADER: &str = "Message";
const DATE_HEADER: &str = "Date";
const PARENT_HEADER: &str = "Parent";
const FIELD_SEPARATOR: &str = ": ";
const DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    parent: Option<ObjectId>,
    message: String,
    timestamp: String,
    snapshot: Snapshot,
}

impl Commit {
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    /// Content-derived identifier: the SHA-1 of the serialized record,
    /// which covers message, date, parent and every snapshot entry.
    pub fn object_id(&self) -> ObjectId {
        ObjectId::hash(self.serialize().as_bytes())
    }

    pub fn serialize(&self) -> String {
        let mut content = String::new();

        // writing into a String cannot fail
        let _ = writeln!(content, "{MESSAGE_HEADER}{FIELD_SEPARATOR}{}", escape(&self.message));
        let _ = writeln!(content, "{DATE_HEADER}{FIELD_SEPARATOR}{}", escape(&self.timestamp));
        if let Some(parent) = &self.parent {
            let _ = writeln!(content, "{PARENT_HEADER}{FIELD_SEPARATOR}{parent}");
        }
        content.push('\n');

        for (path, data) in &self.snapshot {
            let _ = writeln!(
                content,
                "{}{FIELD_SEPARATOR}{}",
                escape(&path.to_string_lossy()),
                escape(data)
            );
        }

        content
    }

    /// Parse a stored record; `source` is only used for error reporting
    pub fn deserialize(content: &str, source: &Path) -> RepositoryResult<Self> {
        let corrupted = |reason: String| RepositoryError::CorruptedData {
            path: source.to_path_buf(),
            reason,
        };

        let mut message = None;
        let mut timestamp = None;
        let mut parent = None;
        let mut snapshot = Snapshot::new();
        let mut in_headers = true;

        for line in content.lines() {
            if in_headers && line.is_empty() {
                in_headers = false;
                continue;
            }

            let (key, value) = split_field(line, FIELD_SEPARATOR)
                .ok_or_else(|| corrupted(format!("malformed line '{line}'")))?;

            if !in_headers {
                snapshot.insert(PathBuf::from(key), value);
                continue;
            }

            match key.as_str() {
                MESSAGE_HEADER => message = Some(value),
                DATE_HEADER => timestamp = Some(value),
                PARENT_HEADER => {
                    parent = Some(
                        ObjectId::try_parse(value)
                            .map_err(|e| corrupted(format!("bad parent id: {e}")))?,
                    )
                }
                other => return Err(corrupted(format!("unknown header '{other}'"))),
            }
        }

        Ok(Commit {
            parent,
            message: message.ok_or_else(|| corrupted("missing Message header".to_string()))?,
            timestamp: timestamp.ok_or_else(|| corrupted("missing Date header".to_string()))?,
            snapshot,
        })
    }
}

/// Timestamp for a new commit.
///
/// Reads `TWIG_COMMIT_DATE` (RFC 2822 or `%Y-%m-%d %H:%M:%S %z`) when set
/// and parseable, otherwise uses the local clock.
pub fn commit_timestamp() -> String {
    let pinned = std::env::var(COMMIT_DATE_ENV).ok().and_then(|date_str| {
        chrono::DateTime::parse_from_rfc2822(&date_str)
            .or_else(|_| chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
            .ok()
    });

    match pinned {
        Some(ts) => ts.format(DATE_FORMAT).to_string(),
        None => chrono::Local::now()
            .fixed_offset()
            .format(DATE_FORMAT)
            .to_string(),
    }
}
