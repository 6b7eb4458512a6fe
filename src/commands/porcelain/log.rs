use crate::areas::repository::Repository;
use crate::artifacts::log::LogOrder;
use crate::artifacts::log::ancestry::Ancestry;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;

pub type CommitIter<'r> = Box<dyn Iterator<Item = anyhow::Result<Commit>> + 'r>;

impl Repository {
    /// Lazily enumerate commits in the requested order
    pub fn commits(&self, order: LogOrder) -> anyhow::Result<CommitIter<'_>> {
        self.ensure_initialized()?;

        match order {
            LogOrder::Listing => Ok(Box::new(self.database().list()?)),
            LogOrder::Ancestry => Ok(Box::new(Ancestry::new(
                self.database(),
                self.refs().read_head()?,
            ))),
        }
    }

    pub fn log(&self, order: LogOrder) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;
        let mut commits = self.commits(order)?.peekable();

        if commits.peek().is_none() {
            writeln!(self.writer(), "No commits found.")?;
            return Ok(());
        }

        let mut first = true;
        for commit in commits {
            let commit = commit?;

            if !first {
                writeln!(self.writer())?;
            }
            first = false;

            self.show_commit(&commit, head.as_ref() == Some(commit.id()))?;
        }

        Ok(())
    }

    fn show_commit(&self, commit: &Commit, is_head: bool) -> anyhow::Result<()> {
        let decoration = if is_head { " (HEAD)" } else { "" };

        writeln!(
            self.writer(),
            "{}",
            format!("commit {}{}", commit.id(), decoration).yellow()
        )?;
        writeln!(
            self.writer(),
            "Parent: {}",
            commit
                .parent()
                .map(|parent| parent.to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "Files:  {}", commit.files().join(", "))?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }
}
