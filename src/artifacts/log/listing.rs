use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;
use std::fs::ReadDir;

/// Iterator over every commit directory in the database
///
/// Entries whose name is not a commit id are skipped.
#[derive(Debug, new)]
pub struct CommitListing<'d> {
    database: &'d Database,
    entries: ReadDir,
}

impl Iterator for CommitListing<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };

            if !entry.path().is_dir() {
                continue;
            }

            if let Ok(id) = CommitId::try_parse(&entry.file_name().to_string_lossy()) {
                return Some(self.database.load(&id));
            }
        }

        None
    }
}
