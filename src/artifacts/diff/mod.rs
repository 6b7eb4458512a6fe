//! Line-level comparison between a staged snapshot and the working copy
//!
//! - `positional`: index-aligned line diff
//!
//! The comparison is positional, not an edit-distance diff: line `i` of one
//! side is only ever compared with line `i` of the other. A single inserted
//! line therefore shows every following line as replaced.

pub mod positional;

use crate::artifacts::diff::positional::FileDiff;

/// Outcome of diffing one staged file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry {
    Compared(FileDiff),
    /// The working copy could not be read; the file is reported and skipped
    Unreadable { name: String, reason: String },
}
