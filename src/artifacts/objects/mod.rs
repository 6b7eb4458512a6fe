//! Commit records and their identifiers
//!
//! Commits are not content-addressed: every commit gets a random UUID when it
//! is created, and its metadata is kept in a plain-text record next to the
//! file snapshots it owns.

pub mod commit;
pub mod commit_id;

/// Value stored in HEAD (and in commit parents or branches) before the first commit
pub const NO_COMMITS_SENTINEL: &str = "master";

/// Length of a short commit id as shown in one-line output
pub const SHORT_ID_LENGTH: usize = 8;
