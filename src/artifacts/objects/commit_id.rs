//! Commit identifier
//!
//! Identifiers are hyphenated UUID v4 strings, e.g.
//! `3f2b8c1e-5d4a-4e8f-9b61-0c2d7a9e4f13`. The store directory of a commit is
//! named after its identifier.
//!
//! Wherever an identifier is persisted (HEAD, branch records, the parent line
//! of a commit) the value may also be the "no commits yet" sentinel, which
//! reads back as `None`.

use crate::artifacts::objects::{NO_COMMITS_SENTINEL, SHORT_ID_LENGTH};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Parse and validate an identifier
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        let uuid = Uuid::parse_str(id.trim())
            .map_err(|err| anyhow::anyhow!("Invalid commit ID {:?}: {}", id, err))?;

        Ok(Self(uuid.hyphenated().to_string()))
    }

    /// Parse a persisted reference value, mapping the sentinel (or an empty value) to `None`
    pub fn parse_ref(content: &str) -> anyhow::Result<Option<Self>> {
        let content = content.trim();

        if content.is_empty() || content == NO_COMMITS_SENTINEL {
            Ok(None)
        } else {
            Self::try_parse(content).map(Some)
        }
    }

    /// Render an optional identifier the way it is persisted
    pub fn to_ref(id: Option<&CommitId>) -> &str {
        id.map(AsRef::as_ref).unwrap_or(NO_COMMITS_SENTINEL)
    }

    pub fn to_short_id(&self) -> &str {
        &self.0[..SHORT_ID_LENGTH]
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
