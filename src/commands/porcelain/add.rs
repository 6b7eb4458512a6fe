use crate::areas::repository::Repository;
use std::path::Path;

impl Repository {
    /// Stage the current content of `path` under its base name
    ///
    /// Fails with `FileNotFound` when `path` is not an existing regular file;
    /// nothing is staged in that case.
    pub fn stage(&self, path: &Path) -> anyhow::Result<String> {
        self.ensure_initialized()?;

        let (name, data) = self.workspace().read_file(path)?;
        self.staging().stage(&name, &data, path)?;

        writeln!(self.writer(), "Staged file: {}", path.display())?;

        Ok(name)
    }
}
