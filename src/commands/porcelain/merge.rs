use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryError;
use tracing::{debug, info};

/// What a merge did to the staging area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The branch points at HEAD (or has no commits); nothing was staged
    UpToDate,
    /// These snapshots were copied from the branch commit into staging
    Staged(Vec<String>),
}

impl Repository {
    /// Copy every snapshot of the branch's commit into the staging area
    ///
    /// There is no common-ancestor search and no conflict detection: a staged
    /// file with the same name is overwritten by the branch's version. No
    /// commit is created; committing afterwards finalizes the merge.
    pub fn merge(&self, name: &str) -> anyhow::Result<MergeOutcome> {
        self.ensure_initialized()?;

        // an unparseable name can never have been registered
        let branch_name = BranchName::try_parse(name.to_string())
            .map_err(|_| RepositoryError::BranchNotFound(name.to_string()))?;

        let target_oid = self.refs().read_branch(&branch_name)?;
        let head_oid = self.refs().read_head()?;

        if target_oid == head_oid {
            writeln!(
                self.writer(),
                "Both branches are at the same commit. Nothing to merge."
            )?;
            return Ok(MergeOutcome::UpToDate);
        }

        let Some(target_oid) = target_oid else {
            writeln!(
                self.writer(),
                "Branch {} has no commits. Nothing to merge.",
                branch_name
            )?;
            return Ok(MergeOutcome::UpToDate);
        };

        debug!(branch = %branch_name, target = %target_oid, "merging branch");

        let commit = self.database().load(&target_oid)?;
        for file in commit.files() {
            let snapshot = self.database().snapshot_path(&target_oid, file);
            self.staging().stage_snapshot(file, &snapshot)?;

            writeln!(self.writer(), "Merged file: {}", file)?;
        }

        info!(branch = %branch_name, files = commit.files().len(), "merged branch into staging");
        writeln!(self.writer(), "Merge completed. Please commit the changes.")?;

        Ok(MergeOutcome::Staged(commit.files().to_vec()))
    }
}
