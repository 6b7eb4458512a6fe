use crate::STORE_DIR;
use crate::errors::{IoContext, RepositoryError};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolve a user-supplied path against the working directory
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        if file_path.is_absolute() {
            file_path.to_path_buf()
        } else {
            self.path.join(file_path)
        }
    }

    /// Read a file that must exist as a regular file
    ///
    /// Returns the base name the file is staged under along with its content.
    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<(String, Vec<u8>)> {
        let resolved = self.resolve(file_path);

        if !resolved.is_file() {
            return Err(RepositoryError::FileNotFound(file_path.to_path_buf()).into());
        }

        let name = resolved
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| RepositoryError::FileNotFound(file_path.to_path_buf()))?;

        let content =
            std::fs::read(&resolved).io_context(|| format!("failed to read file {:?}", resolved))?;

        Ok((name, content))
    }

    /// Read the top-level working file named `name`
    pub fn read_named(&self, name: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.path.join(name))
    }

    /// Regular files directly inside the working directory, sorted by name
    ///
    /// Directories (including the store itself) are never listed.
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.path)
            .io_context(|| format!("failed to list working directory {:?}", self.path))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry
                .io_context(|| format!("failed to list working directory {:?}", self.path))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if entry.path().is_file() && name != STORE_DIR {
                names.push(name);
            }
        }
        names.sort();

        Ok(names)
    }
}
