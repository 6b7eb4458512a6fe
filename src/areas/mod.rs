//! Core repository components
//!
//! This module contains the persisted areas of a repository:
//!
//! - `database`: Commit directories holding snapshots and metadata
//! - `staging`: Staging area and the append-only index log
//! - `refs`: HEAD and branch records
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub(crate) mod database;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod staging;
pub(crate) mod workspace;
