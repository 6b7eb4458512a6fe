use crate::common::command::{committed_repository_dir, get_head_commit_id, mygit_commit};
use crate::common::file::{list_dir, store_dir};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_with_empty_staging_fails(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;
    let head_before = get_head_commit_id(repository_dir.path());
    let commits_before = list_dir(&store_dir(repository_dir.path()).join("commits"));

    mygit_commit(repository_dir.path(), "nothing here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));

    assert_eq!(get_head_commit_id(repository_dir.path()), head_before);
    assert_eq!(
        list_dir(&store_dir(repository_dir.path()).join("commits")),
        commits_before
    );

    Ok(())
}
