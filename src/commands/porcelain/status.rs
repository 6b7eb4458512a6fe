use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusInfo;
use colored::Colorize;
use tracing::warn;

impl Repository {
    /// Collect staged names and working files that changed since staging
    ///
    /// Only top-level regular files that have a staged snapshot are compared;
    /// a never-staged file is not reported as modified.
    pub fn status_info(&self) -> anyhow::Result<StatusInfo> {
        self.ensure_initialized()?;

        let staged = self.staging().entries()?.into_iter().collect::<Vec<_>>();

        let mut modified = Vec::new();
        for name in self.workspace().list_files()? {
            if !self.staging().contains(&name) {
                continue;
            }

            let working = match self.workspace().read_named(&name) {
                Ok(data) => data,
                Err(err) => {
                    warn!(file = %name, error = %err, "skipping unreadable working file");
                    continue;
                }
            };

            if working != self.staging().read(&name)? {
                modified.push(name);
            }
        }

        Ok(StatusInfo { staged, modified })
    }

    pub fn status(&self) -> anyhow::Result<()> {
        let status_info = self.status_info()?;

        writeln!(self.writer(), "Staged for commit:")?;
        if status_info.staged.is_empty() {
            writeln!(self.writer(), "  No files staged.")?;
        }
        for file in &status_info.staged {
            writeln!(self.writer(), "  {}", file.green())?;
        }

        writeln!(self.writer())?;
        writeln!(self.writer(), "Modified but not staged:")?;
        for file in &status_info.modified {
            writeln!(self.writer(), "  {}", file.red())?;
        }

        Ok(())
    }
}
