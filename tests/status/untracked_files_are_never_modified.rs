use crate::common::command::{init_repository_dir, run_mygit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn untracked_files_are_never_modified(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("untracked.txt"),
        "never staged".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("dir").join("nested.txt"),
        "nested".to_string(),
    ));

    run_mygit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("Staged for commit:\n  No files staged.\n\nModified but not staged:\n");

    Ok(())
}
