//! User-facing repository operations
//!
//! Each operation is an `impl Repository` block that performs the state
//! transition and writes a human-readable report to the repository writer.

pub mod add;
pub mod branch;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
pub mod status;
