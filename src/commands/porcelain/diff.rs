use crate::areas::repository::Repository;
use crate::artifacts::diff::DiffEntry;
use crate::artifacts::diff::positional::{FileDiff, LineChange, positional_diff};
use colored::Colorize;
use tracing::warn;

impl Repository {
    /// Compare every staged snapshot with the working file of the same name
    ///
    /// A working file that cannot be read yields `DiffEntry::Unreadable`
    /// and the remaining files are still compared.
    pub fn diff_entries(&self) -> anyhow::Result<Vec<DiffEntry>> {
        self.ensure_initialized()?;

        let mut entries = Vec::new();
        for name in self.staging().entries()? {
            let working = match self.workspace().read_named(&name) {
                Ok(data) => data,
                Err(err) => {
                    warn!(file = %name, error = %err, "cannot read working file");
                    entries.push(DiffEntry::Unreadable {
                        name,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };
            let staged = self.staging().read(&name)?;

            let lines = positional_diff(
                &String::from_utf8_lossy(&staged),
                &String::from_utf8_lossy(&working),
            );
            entries.push(DiffEntry::Compared(FileDiff::new(name, lines)));
        }

        Ok(entries)
    }

    pub fn diff(&self) -> anyhow::Result<()> {
        let entries = self.diff_entries()?;

        if entries.is_empty() {
            writeln!(self.writer(), "No files staged for diff.")?;
            return Ok(());
        }

        for entry in entries {
            match entry {
                DiffEntry::Compared(file_diff) => self.print_file_diff(&file_diff)?,
                DiffEntry::Unreadable { name, reason } => {
                    writeln!(self.writer(), "Cannot diff {}: {}", name, reason)?;
                }
            }
        }

        Ok(())
    }

    fn print_file_diff(&self, file_diff: &FileDiff) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("Diff for file: {}", file_diff.name).bold()
        )?;

        for line in &file_diff.lines {
            let line = match line.change {
                LineChange::Removed => line.to_string().red(),
                LineChange::Added => line.to_string().green(),
            };
            writeln!(self.writer(), "{}", line)?;
        }

        Ok(())
    }
}
