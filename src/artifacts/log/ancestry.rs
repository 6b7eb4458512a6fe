use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;

/// Iterator walking parent ids, starting at `next`
#[derive(Debug, new)]
pub struct Ancestry<'d> {
    database: &'d Database,
    next: Option<CommitId>,
}

impl Iterator for Ancestry<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;

        match self.database.load(&id) {
            Ok(commit) => {
                self.next = commit.parent().cloned();
                Some(Ok(commit))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
