use crate::common::command::{
    committed_repository_dir, mygit_add, mygit_merge, run_mygit_command,
};
use crate::common::file::{FileSpec, list_dir, store_dir, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Merging a branch that points to the same commit as HEAD leaves staging as it was
#[rstest]
fn merge_same_commit(committed_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;

    run_mygit_command(repository_dir.path(), &["branch", "same"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "pending edit".to_string(),
    ));
    mygit_add(repository_dir.path(), "1.txt").assert().success();

    mygit_merge(repository_dir.path(), "same")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to merge"))
        .stdout(predicate::str::contains("Merged file").not());

    let staging = store_dir(repository_dir.path()).join("staging");
    assert_eq!(list_dir(&staging), vec!["1.txt"]);
    assert_eq!(std::fs::read_to_string(staging.join("1.txt"))?, "pending edit");

    Ok(())
}
