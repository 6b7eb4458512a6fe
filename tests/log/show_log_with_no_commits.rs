use crate::common::command::{init_repository_dir, run_mygit_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_log_with_no_commits(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mygit_command(init_repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout("No commits found.\n");

    Ok(())
}
