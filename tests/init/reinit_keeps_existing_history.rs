use crate::common::command::{committed_repository_dir, get_head_commit_id, run_mygit_command};
use crate::common::file::{list_dir, store_dir};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reinit_keeps_existing_history(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;
    run_mygit_command(repository_dir.path(), &["branch", "keep"])
        .assert()
        .success();

    let head_before = get_head_commit_id(repository_dir.path());
    let commits_before = list_dir(&store_dir(repository_dir.path()).join("commits"));

    run_mygit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    assert_eq!(get_head_commit_id(repository_dir.path()), head_before);
    assert_eq!(
        list_dir(&store_dir(repository_dir.path()).join("commits")),
        commits_before
    );
    assert_eq!(
        list_dir(&store_dir(repository_dir.path()).join("branches")),
        vec!["keep"]
    );

    Ok(())
}
