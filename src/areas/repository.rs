use crate::STORE_DIR;
use crate::areas::database::{COMMITS_DIR, Database};
use crate::areas::refs::Refs;
use crate::areas::staging::Staging;
use crate::areas::workspace::Workspace;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// A repository rooted at a working directory
///
/// Every operation goes through this value; nothing is kept in process-wide
/// state, so several repositories can be driven side by side. Human-readable
/// reports are written to `writer`.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: Staging,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// Nothing is created on disk; a missing work tree is only made by `init`.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = if path.exists() {
            path.canonicalize()
        } else {
            std::path::absolute(path)
        }
        .with_context(|| format!("Failed to resolve work tree {:?}", path))?;
        let store_path = path.join(STORE_DIR);

        let staging = Staging::new(&store_path);
        let database = Database::new(store_path.join(COMMITS_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(store_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging,
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store_path(&self) -> Box<Path> {
        self.path.join(STORE_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn is_initialized(&self) -> bool {
        self.store_path().is_dir()
    }

    /// Fail with `NotInitialized` unless `init` has run
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotInitialized(self.path.to_path_buf()).into())
        }
    }
}
