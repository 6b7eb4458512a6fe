//! Commit database
//!
//! One directory per commit under `.mygit/commits`, named by the commit id:
//!
//! ```text
//! commits/<id>/commit.txt      metadata record
//! commits/<id>/files/<name>    file snapshots moved out of staging
//! ```
//!
//! Snapshots live in their own sub-directory so a user file called
//! `commit.txt` cannot clash with the metadata record.

use crate::areas::staging::Staging;
use crate::artifacts::log::listing::CommitListing;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{IoContext, RepositoryError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the commit history directory
pub const COMMITS_DIR: &str = "commits";

/// Name of the metadata record inside a commit directory
pub const METADATA_FILE: &str = "commit.txt";

/// Name of the snapshot directory inside a commit directory
pub const SNAPSHOTS_DIR: &str = "files";

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    pub fn commit_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.as_ref())
    }

    pub fn snapshots_path(&self, id: &CommitId) -> PathBuf {
        self.commit_path(id).join(SNAPSHOTS_DIR)
    }

    pub fn snapshot_path(&self, id: &CommitId, name: &str) -> PathBuf {
        self.snapshots_path(id).join(name)
    }

    pub fn exists(&self, id: &CommitId) -> bool {
        self.commit_path(id).join(METADATA_FILE).is_file()
    }

    /// Load a commit record together with the names of its snapshots
    pub fn load(&self, id: &CommitId) -> anyhow::Result<Commit> {
        if !self.exists(id) {
            return Err(RepositoryError::CommitNotFound(id.to_string()).into());
        }

        let metadata_path = self.commit_path(id).join(METADATA_FILE);
        let metadata = std::fs::read_to_string(&metadata_path)
            .io_context(|| format!("failed to read commit metadata {:?}", metadata_path))?;

        let commit = Commit::parse_metadata(id.clone(), &metadata)?;
        let files = self.snapshot_names(id)?;

        Ok(commit.with_files(files))
    }

    fn snapshot_names(&self, id: &CommitId) -> anyhow::Result<Vec<String>> {
        let snapshots_path = self.snapshots_path(id);
        if !snapshots_path.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&snapshots_path)
            .io_context(|| format!("failed to list snapshots at {:?}", snapshots_path))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.io_context(|| format!("failed to list snapshots at {:?}", snapshots_path))?;

            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(names)
    }

    /// Lazily enumerate every stored commit in directory listing order
    pub fn list(&self) -> anyhow::Result<CommitListing<'_>> {
        let entries = std::fs::read_dir(&self.path)
            .io_context(|| format!("failed to list commits at {:?}", self.path))?;

        Ok(CommitListing::new(self, entries))
    }

    /// Persist `commit`, moving every staged snapshot into it
    ///
    /// On failure, snapshots already moved are put back into staging and the
    /// commit directory is removed before the error is returned.
    pub fn store(&self, commit: Commit, staging: &Staging) -> anyhow::Result<Commit> {
        let mut moved = Vec::new();

        match self.write_commit(&commit, staging, &mut moved) {
            Ok(()) => {
                debug!(commit = %commit.id(), files = moved.len(), "stored commit");
                Ok(commit.with_files(moved))
            }
            Err(err) => {
                warn!(commit = %commit.id(), error = %err, "commit failed, rolling back");
                self.rollback(commit.id(), &moved, staging);
                Err(err)
            }
        }
    }

    fn write_commit(
        &self,
        commit: &Commit,
        staging: &Staging,
        moved: &mut Vec<String>,
    ) -> anyhow::Result<()> {
        let snapshots_path = self.snapshots_path(commit.id());
        std::fs::create_dir_all(&snapshots_path)
            .io_context(|| format!("failed to create commit directory {:?}", snapshots_path))?;

        let metadata_path = self.commit_path(commit.id()).join(METADATA_FILE);
        std::fs::write(&metadata_path, commit.serialize_metadata())
            .io_context(|| format!("failed to write commit metadata {:?}", metadata_path))?;

        for name in staging.entries()? {
            let source = staging.entry_path(&name);
            let target = self.snapshot_path(commit.id(), &name);

            std::fs::rename(&source, &target)
                .io_context(|| format!("failed to move {:?} into commit", source))?;
            moved.push(name);
        }

        Ok(())
    }

    /// Undo a partially or fully written commit
    ///
    /// Best effort: failures are logged, the caller already has the error
    /// that triggered the rollback.
    pub fn rollback(&self, id: &CommitId, moved: &[String], staging: &Staging) {
        for name in moved {
            let source = self.snapshot_path(id, name);
            if let Err(err) = std::fs::rename(&source, staging.entry_path(name)) {
                warn!(commit = %id, file = %name, error = %err, "failed to restore staged file");
            }
        }

        let commit_path = self.commit_path(id);
        if commit_path.exists()
            && let Err(err) = std::fs::remove_dir_all(&commit_path)
        {
            warn!(commit = %id, error = %err, "failed to remove partial commit");
        }
    }
}
