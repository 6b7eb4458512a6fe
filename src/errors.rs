//! Error taxonomy for repository operations.
//!
//! Operations return `anyhow::Result`; the variants below are what callers
//! can recover with `downcast_ref::<RepositoryError>()`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store directory is missing.
    #[error("not a mygit repository (run `mygit init` first): {0}")]
    NotInitialized(PathBuf),

    #[error("repository already initialized in {0}")]
    AlreadyInitialized(PathBuf),

    /// A file passed to `add` does not exist or is not a regular file.
    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("branch does not exist: {0}")]
    BranchNotFound(String),

    #[error("branch already exists: {0}")]
    BranchAlreadyExists(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    /// A commit directory referenced by HEAD or a branch is missing.
    #[error("commit does not exist: {0}")]
    CommitNotFound(String),

    #[error("nothing to commit, no files staged")]
    EmptyStagingArea,

    #[error("I/O failure: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Attach a path-aware message to an I/O result.
pub(crate) trait IoContext<T> {
    fn io_context(self, context: impl FnOnce() -> String) -> Result<T, RepositoryError>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context(self, context: impl FnOnce() -> String) -> Result<T, RepositoryError> {
        self.map_err(|source| RepositoryError::Io {
            context: context(),
            source,
        })
    }
}
