//! HEAD and branch records
//!
//! Both are single-value text files containing a commit identifier, or the
//! "no commits yet" sentinel before the first commit:
//!
//! - `.mygit/HEAD`: the commit the current line of work points at
//! - `.mygit/branches/<name>`: one file per branch
//!
//! HEAD only moves on commit. Branches never move once created.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{IoContext, RepositoryError};
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the HEAD file
pub const HEAD_REF_NAME: &str = "HEAD";

/// Name of the branch table directory
pub const BRANCHES_DIR: &str = "branches";

/// References manager
///
/// Reads and writes HEAD and branch records. Writes hold an exclusive
/// advisory lock on the record for the duration of the write.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the store directory (typically `.mygit`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn branches_path(&self) -> Box<Path> {
        self.path.join(BRANCHES_DIR).into_boxed_path()
    }

    fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.branches_path().join(name.as_ref()).into_boxed_path()
    }

    /// Read the commit HEAD points at, `None` before the first commit
    pub fn read_head(&self) -> anyhow::Result<Option<CommitId>> {
        self.read_ref_file(&self.head_path())
    }

    /// Point HEAD at `oid`, or reset it to the sentinel
    pub fn update_head(&self, oid: Option<&CommitId>) -> anyhow::Result<()> {
        debug!(head = CommitId::to_ref(oid), "updating HEAD");
        self.update_ref_file(&self.head_path(), CommitId::to_ref(oid))
    }

    /// Register a new branch pointing at `target`
    ///
    /// Fails with `BranchAlreadyExists` when a record with that name is present.
    pub fn create_branch(
        &self,
        name: &BranchName,
        target: Option<&CommitId>,
    ) -> anyhow::Result<()> {
        let branch_path = self.branch_path(name);

        let ref_file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&branch_path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(RepositoryError::BranchAlreadyExists(name.to_string()).into());
            }
            Err(source) => {
                let context = format!("failed to create branch file at {:?}", branch_path);
                return Err(RepositoryError::Io { context, source }.into());
            }
        };

        self.fill_branch_record(ref_file, name, target)?;

        debug!(branch = %name, target = CommitId::to_ref(target), "created branch");
        Ok(())
    }

    /// Write `target` into a freshly created branch record
    ///
    /// On failure the record is removed: an empty record would read back as a
    /// registered branch without commits.
    fn fill_branch_record(
        &self,
        mut ref_file: std::fs::File,
        name: &BranchName,
        target: Option<&CommitId>,
    ) -> Result<(), RepositoryError> {
        let branch_path = self.branch_path(name);
        let result = Self::write_ref(&mut ref_file, &branch_path, CommitId::to_ref(target));
        drop(ref_file);

        if result.is_err()
            && let Err(err) = std::fs::remove_file(&branch_path)
        {
            warn!(branch = %name, error = %err, "failed to remove partial branch file");
        }

        result
    }

    /// Read the commit a branch points at
    ///
    /// Fails with `BranchNotFound` when the branch is not registered.
    pub fn read_branch(&self, name: &BranchName) -> anyhow::Result<Option<CommitId>> {
        let branch_path = self.branch_path(name);

        if !branch_path.is_file() {
            return Err(RepositoryError::BranchNotFound(name.to_string()).into());
        }

        self.read_ref_file(&branch_path)
    }

    /// List registered branches with their targets, sorted by name
    pub fn list_branches(&self) -> anyhow::Result<Vec<(BranchName, Option<CommitId>)>> {
        let branches_path = self.branches_path();
        let entries = std::fs::read_dir(&branches_path)
            .io_context(|| format!("failed to list branches at {:?}", branches_path))?;

        let mut branches = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                BranchName::try_parse(entry.file_name().to_string_lossy().into_owned()).ok()
            })
            .map(|name| {
                let target = self.read_ref_file(&self.branch_path(&name))?;
                Ok((name, target))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        branches.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(branches)
    }

    fn read_ref_file(&self, path: &Path) -> anyhow::Result<Option<CommitId>> {
        let content = std::fs::read_to_string(path)
            .io_context(|| format!("failed to read ref file at {:?}", path))?;

        CommitId::parse_ref(&content)
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        // open the ref file as WRONLY and CREAT to write the commit id to it
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .io_context(|| format!("failed to open ref file at {:?}", path))?;

        Ok(Self::write_ref(&mut ref_file, path, raw_ref)?)
    }

    fn write_ref(
        ref_file: &mut std::fs::File,
        path: &Path,
        raw_ref: &str,
    ) -> Result<(), RepositoryError> {
        let mut lock = file_guard::lock(ref_file, Lock::Exclusive, 0, 1)
            .io_context(|| format!("failed to lock ref file at {:?}", path))?;
        lock.deref_mut()
            .write_all(raw_ref.as_bytes())
            .io_context(|| format!("failed to write ref file at {:?}", path))?;

        Ok(())
    }
}
