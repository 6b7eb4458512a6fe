use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use tracing::{info, warn};

impl Repository {
    /// Turn the staging area into a new commit and advance HEAD to it
    ///
    /// Fails with `EmptyStagingArea` when nothing is staged. If any step
    /// fails, staged files are restored, the commit directory is removed and
    /// HEAD keeps its previous value.
    pub fn commit(&self, message: &str) -> anyhow::Result<CommitId> {
        self.ensure_initialized()?;

        if self.staging().is_empty()? {
            return Err(RepositoryError::EmptyStagingArea.into());
        }

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit = Commit::new(CommitId::generate(), parent.clone(), message.to_string());
        let commit = self.database().store(commit, self.staging())?;

        if let Err(err) = self.refs().update_head(Some(commit.id())) {
            warn!(commit = %commit.id(), error = %err, "failed to advance HEAD, rolling back");
            self.database().rollback(commit.id(), commit.files(), self.staging());
            if let Err(restore_err) = self.refs().update_head(parent.as_ref()) {
                warn!(error = %restore_err, "failed to restore HEAD");
            }
            return Err(err);
        }

        self.staging().clear()?;

        info!(commit = %commit.id(), files = commit.files().len(), "created commit");
        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit.id().to_short_id(),
            commit.short_message()
        )?;

        Ok(commit.id().clone())
    }
}
