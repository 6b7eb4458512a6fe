use crate::common::command::{init_repository_dir, mygit_add, run_mygit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("2.txt"),
        "two".to_string(),
    ));
    mygit_add(repository_dir.path(), "1.txt").assert().success();
    mygit_add(repository_dir.path(), "2.txt").assert().success();

    // same size, different content
    write_file(FileSpec::new(
        repository_dir.path().join("2.txt"),
        "owt".to_string(),
    ));

    run_mygit_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("Staged for commit:\n  1.txt\n  2.txt\n\nModified but not staged:\n  2.txt\n");

    Ok(())
}
