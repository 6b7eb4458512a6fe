use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use colored::Colorize;

impl Repository {
    /// Register a branch pointing at the current HEAD commit
    ///
    /// Fails with `BranchAlreadyExists` if the name is taken. HEAD and the
    /// staging area are left alone.
    pub fn branch(&self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(name.to_string())?;
        let head = self.refs().read_head()?;

        self.refs().create_branch(&branch_name, head.as_ref())?;

        writeln!(self.writer(), "Branch created: {}", branch_name)?;

        Ok(())
    }

    /// Registered branches and their targets, sorted by name
    pub fn branches(&self) -> anyhow::Result<Vec<(BranchName, Option<CommitId>)>> {
        self.ensure_initialized()?;
        self.refs().list_branches()
    }

    /// Print every branch, marking the ones that point at HEAD
    pub fn list_branches(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;

        for (name, target) in self.branches()? {
            let target_label = target
                .as_ref()
                .map(|id| id.to_short_id().to_string())
                .unwrap_or_else(|| "(no commits)".to_string());

            if target == head {
                writeln!(self.writer(), "* {} {}", name.as_ref().green(), target_label)?;
            } else {
                writeln!(self.writer(), "  {} {}", name, target_label)?;
            }
        }

        Ok(())
    }
}
