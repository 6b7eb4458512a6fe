//! A minimal version-control engine over a directory-backed store.
//!
//! The store lives in `.mygit` at the root of the working directory and keeps
//! a staging area, commit snapshots identified by random ids, flat branch
//! records and a single HEAD value.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the store directory at the root of the working tree
pub const STORE_DIR: &str = ".mygit";
