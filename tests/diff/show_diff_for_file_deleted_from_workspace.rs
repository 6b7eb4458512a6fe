use crate::common::command::{init_repository_dir, mygit_add, run_mygit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_diff_for_file_deleted_from_workspace(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("gone.txt"),
        "x".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("kept.txt"),
        "same\nold\n".to_string(),
    ));
    mygit_add(repository_dir.path(), "gone.txt").assert().success();
    mygit_add(repository_dir.path(), "kept.txt").assert().success();

    std::fs::remove_file(repository_dir.path().join("gone.txt"))?;
    write_file(FileSpec::new(
        repository_dir.path().join("kept.txt"),
        "same\n".to_string(),
    ));

    run_mygit_command(repository_dir.path(), &["diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot diff gone.txt"))
        .stdout(predicate::str::contains("Diff for file: kept.txt\n- old\n"));

    Ok(())
}
