use crate::common::command::{init_repository_dir, mygit_add, run_mygit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_positional_diff_for_staged_file(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let file = repository_dir.path().join("a.txt");

    write_file(FileSpec::new(file.clone(), "a\nb\n".to_string()));
    mygit_add(repository_dir.path(), "a.txt").assert().success();
    write_file(FileSpec::new(file, "a\nc\nd\n".to_string()));

    run_mygit_command(repository_dir.path(), &["diff"])
        .assert()
        .success()
        .stdout("Diff for file: a.txt\n- b\n+ c\n+ d\n");

    Ok(())
}

#[rstest]
fn show_no_diff_when_nothing_is_staged(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mygit_command(init_repository_dir.path(), &["diff"])
        .assert()
        .success()
        .stdout("No files staged for diff.\n");

    Ok(())
}
