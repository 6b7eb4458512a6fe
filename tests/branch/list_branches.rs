use crate::common::command::{
    get_head_commit_id, init_repository_dir, mygit_add, mygit_commit, run_mygit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_branches(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_mygit_command(repository_dir.path(), &["branch", "early"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "a".to_string(),
    ));
    mygit_add(repository_dir.path(), "a.txt").assert().success();
    mygit_commit(repository_dir.path(), "first")
        .assert()
        .success();
    run_mygit_command(repository_dir.path(), &["branch", "current"])
        .assert()
        .success();

    let head = get_head_commit_id(repository_dir.path());
    let expected = format!("* current {}\n  early (no commits)\n", &head[..8]);

    run_mygit_command(repository_dir.path(), &["branch"])
        .assert()
        .success()
        .stdout(expected);

    Ok(())
}
