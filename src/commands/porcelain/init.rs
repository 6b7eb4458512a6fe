use crate::areas::database::COMMITS_DIR;
use crate::areas::refs::BRANCHES_DIR;
use crate::areas::repository::Repository;
use crate::areas::staging::{INDEX_FILE, STAGING_DIR};
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use tracing::info;

impl Repository {
    /// Create the store with empty commit, branch and staging areas
    ///
    /// Fails with `AlreadyInitialized`, touching nothing, when the store exists.
    pub fn init(&self) -> anyhow::Result<()> {
        let store_path = self.store_path();

        if store_path.exists() {
            return Err(RepositoryError::AlreadyInitialized(store_path.to_path_buf()).into());
        }

        fs::create_dir_all(self.path())
            .with_context(|| format!("Failed to create work tree {:?}", self.path()))?;
        fs::create_dir(&store_path).context("Failed to create .mygit directory")?;

        for area in [COMMITS_DIR, BRANCHES_DIR, STAGING_DIR] {
            fs::create_dir(store_path.join(area))
                .with_context(|| format!("Failed to create .mygit/{} directory", area))?;
        }

        fs::write(store_path.join(INDEX_FILE), b"").context("Failed to create .mygit/index file")?;

        self.refs()
            .update_head(None)
            .context("Failed to create initial HEAD reference")?;

        info!(path = %store_path.display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            store_path.display()
        )?;

        Ok(())
    }
}
