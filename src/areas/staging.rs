//! Staging area
//!
//! Staged snapshots are plain copies of working-directory files kept in
//! `.mygit/staging`, keyed by base name, so staging a second file with the
//! same name replaces the first. Every stage also appends the path as given
//! by the user to `.mygit/index`, a plain-text log with one path per line.
//!
//! Both the directory and the log are emptied by a successful commit.

use crate::errors::IoContext;
use file_guard::Lock;
use std::collections::BTreeSet;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the staging directory
pub const STAGING_DIR: &str = "staging";

/// Name of the index log
pub const INDEX_FILE: &str = "index";

#[derive(Debug)]
pub struct Staging {
    /// Path to the staging directory (typically `.mygit/staging`)
    path: Box<Path>,
    /// Path to the index log (typically `.mygit/index`)
    index_path: Box<Path>,
}

impl Staging {
    pub fn new(store_path: &Path) -> Self {
        Staging {
            path: store_path.join(STAGING_DIR).into_boxed_path(),
            index_path: store_path.join(INDEX_FILE).into_boxed_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn entry_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Store `data` as the snapshot for `name` and log `original_path`
    pub fn stage(&self, name: &str, data: &[u8], original_path: &Path) -> anyhow::Result<()> {
        let entry_path = self.entry_path(name);
        std::fs::write(&entry_path, data)
            .io_context(|| format!("failed to write staged file {:?}", entry_path))?;

        self.append_to_index(original_path)?;

        debug!(name, path = %original_path.display(), bytes = data.len(), "staged file");
        Ok(())
    }

    /// Copy an existing snapshot into staging under `name` without logging it
    pub fn stage_snapshot(&self, name: &str, source: &Path) -> anyhow::Result<()> {
        let entry_path = self.entry_path(name);
        std::fs::copy(source, &entry_path)
            .io_context(|| format!("failed to copy {:?} into staging", source))?;

        debug!(name, source = %source.display(), "staged snapshot");
        Ok(())
    }

    fn append_to_index(&self, original_path: &Path) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.index_path)
            .io_context(|| format!("failed to open index at {:?}", self.index_path))?;
        let mut lock = file_guard::lock(&mut index_file, Lock::Exclusive, 0, 1)
            .io_context(|| format!("failed to lock index at {:?}", self.index_path))?;

        writeln!(lock.deref_mut(), "{}", original_path.display())
            .io_context(|| format!("failed to append to index at {:?}", self.index_path))?;

        Ok(())
    }

    /// Names of the staged snapshots, sorted
    pub fn entries(&self) -> anyhow::Result<BTreeSet<String>> {
        let entries = std::fs::read_dir(&self.path)
            .io_context(|| format!("failed to list staging area at {:?}", self.path))?;

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry =
                entry.io_context(|| format!("failed to list staging area at {:?}", self.path))?;

            if entry.path().is_file() {
                names.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(names)
    }

    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.entries()?.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry_path(name).is_file()
    }

    pub fn read(&self, name: &str) -> anyhow::Result<Vec<u8>> {
        let entry_path = self.entry_path(name);

        Ok(std::fs::read(&entry_path)
            .io_context(|| format!("failed to read staged file {:?}", entry_path))?)
    }

    /// Paths logged in the index, oldest first
    pub fn logged_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        if !self.index_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.index_path)
            .io_context(|| format!("failed to read index at {:?}", self.index_path))?;

        Ok(content.lines().map(PathBuf::from).collect())
    }

    /// Remove every remaining snapshot and truncate the index log
    pub fn clear(&self) -> anyhow::Result<()> {
        for name in self.entries()? {
            let entry_path = self.entry_path(&name);
            std::fs::remove_file(&entry_path)
                .io_context(|| format!("failed to remove staged file {:?}", entry_path))?;
        }

        std::fs::write(&self.index_path, b"")
            .io_context(|| format!("failed to truncate index at {:?}", self.index_path))?;

        debug!("cleared staging area");
        Ok(())
    }
}
