use crate::common::command::{
    get_head_commit_id, get_parent_commit_id, init_repository_dir, mygit_add, mygit_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn sequential_commits_link_parents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let file = repository_dir.path().join("a.txt");

    write_file(FileSpec::new(file.clone(), "one".to_string()));
    mygit_add(repository_dir.path(), "a.txt").assert().success();
    mygit_commit(repository_dir.path(), "first").assert().success();
    let first = get_head_commit_id(repository_dir.path());

    write_file(FileSpec::new(file, "two".to_string()));
    mygit_add(repository_dir.path(), "a.txt").assert().success();
    mygit_commit(repository_dir.path(), "second")
        .assert()
        .success();
    let second = get_head_commit_id(repository_dir.path());

    assert_ne!(first, second);
    assert_eq!(get_parent_commit_id(repository_dir.path(), &second), first);
    assert_eq!(get_parent_commit_id(repository_dir.path(), &first), "master");

    Ok(())
}
