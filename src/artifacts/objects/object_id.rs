//! Commit identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. Each commit
//! record is stored under its id in `.git/commits/<id>`.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{RepositoryError, RepositoryResult};
use sha1::{Digest, Sha1};

/// Commit identifier
///
/// A 40-character hexadecimal string. Parsing validates length and
/// characters; it says nothing about whether the commit exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Upper-case digits are accepted and normalised to lower case.
    pub fn try_parse(id: String) -> RepositoryResult<Self> {
        if !Self::looks_like_oid(&id) {
            return Err(RepositoryError::InvalidRevision(id));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Hash arbitrary content into an object ID
    pub fn hash(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Whether `s` has the shape of a full object ID
    pub fn looks_like_oid(s: &str) -> bool {
        s.len() == OBJECT_ID_LENGTH && s.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
