//! Commit history enumeration
//!
//! - `listing`: every stored commit, in directory listing order
//! - `ancestry`: the parent chain starting at HEAD, newest first
//!
//! Both are lazy: a commit record is only read when the iterator reaches it.

pub mod ancestry;
pub mod listing;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogOrder {
    /// Filesystem listing order; stable for a given store but not chronological
    #[default]
    Listing,
    /// Follow parent ids from HEAD back to the first commit
    Ancestry,
}
