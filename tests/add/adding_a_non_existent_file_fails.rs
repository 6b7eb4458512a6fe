use crate::common::command::{init_repository_dir, mygit_add, repository_dir};
use crate::common::file::{list_dir, store_dir};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_file_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    mygit_add(repository_dir.path(), "a.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file does not exist: a.txt"));

    assert!(list_dir(&store_dir(repository_dir.path()).join("staging")).is_empty());
    assert_eq!(
        std::fs::read_to_string(store_dir(repository_dir.path()).join("index"))?,
        ""
    );

    Ok(())
}

#[rstest]
fn adding_before_init_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(repository_dir.path().join("a.txt"), "a")?;

    mygit_add(repository_dir.path(), "a.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a mygit repository"));

    Ok(())
}
