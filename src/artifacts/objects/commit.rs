//! Commit record
//!
//! A commit owns the file snapshots moved out of the staging area plus a
//! metadata record. The metadata is kept as plain text, one field per line:
//!
//! ```text
//! Commit Message: <message>
//! Timestamp: <RFC 3339 timestamp>
//! Parent Commit: <parent id or sentinel>
//! ```
//!
//! A multi-line message spans several lines; the timestamp and parent are
//! always the last two lines of the record.

use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};

const MESSAGE_PREFIX: &str = "Commit Message: ";
const TIMESTAMP_PREFIX: &str = "Timestamp: ";
const PARENT_PREFIX: &str = "Parent Commit: ";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    id: CommitId,
    parent: Option<CommitId>,
    message: String,
    timestamp: DateTime<FixedOffset>,
    /// Base names of the file snapshots owned by the commit, sorted
    files: Vec<String>,
}

impl Commit {
    /// Create a new commit record stamped with the current local time
    pub fn new(id: CommitId, parent: Option<CommitId>, message: String) -> Self {
        Commit {
            id,
            parent,
            message,
            timestamp: chrono::Local::now().fixed_offset(),
            files: Vec::new(),
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn parent(&self) -> Option<&CommitId> {
        self.parent.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn with_files(mut self, mut files: Vec<String>) -> Self {
        files.sort();
        self.files = files;
        self
    }

    /// Render the metadata record
    pub fn serialize_metadata(&self) -> String {
        format!(
            "{MESSAGE_PREFIX}{}\n{TIMESTAMP_PREFIX}{}\n{PARENT_PREFIX}{}\n",
            self.message,
            self.timestamp.to_rfc3339(),
            CommitId::to_ref(self.parent.as_ref())
        )
    }

    /// Parse a metadata record for the commit stored under `id`
    pub fn parse_metadata(id: CommitId, content: &str) -> anyhow::Result<Self> {
        let mut lines = content.lines().collect::<Vec<_>>();

        let parent = lines
            .pop()
            .and_then(|line| line.strip_prefix(PARENT_PREFIX))
            .with_context(|| format!("Invalid commit {}: missing parent line", id))?;
        let parent = CommitId::parse_ref(parent)?;

        let timestamp = lines
            .pop()
            .and_then(|line| line.strip_prefix(TIMESTAMP_PREFIX))
            .with_context(|| format!("Invalid commit {}: missing timestamp line", id))?;
        let timestamp = DateTime::parse_from_rfc3339(timestamp)
            .with_context(|| format!("Invalid commit {}: bad timestamp {:?}", id, timestamp))?;

        let message = lines
            .join("\n")
            .strip_prefix(MESSAGE_PREFIX)
            .with_context(|| format!("Invalid commit {}: missing message line", id))?
            .to_string();

        Ok(Commit {
            id,
            parent,
            message,
            timestamp,
            files: Vec::new(),
        })
    }
}
