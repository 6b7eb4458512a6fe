use crate::common::command::{committed_repository_dir, get_head_commit_id, run_mygit_command};
use crate::common::file::store_dir;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_successfully(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;
    let head = get_head_commit_id(repository_dir.path());

    run_mygit_command(repository_dir.path(), &["branch", "feature-branch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Branch created: feature-branch"));

    let branch_ref_path = store_dir(repository_dir.path())
        .join("branches")
        .join("feature-branch");
    assert_eq!(std::fs::read_to_string(branch_ref_path)?, head);
    assert_eq!(get_head_commit_id(repository_dir.path()), head);

    Ok(())
}

#[rstest]
fn create_branch_with_invalid_name(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    for name in ["feature/x", ".hidden", "a..b", "name.lock"] {
        run_mygit_command(committed_repository_dir.path(), &["branch", name])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid branch name"));
    }

    Ok(())
}
