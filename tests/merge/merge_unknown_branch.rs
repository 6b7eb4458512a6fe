use crate::common::command::{committed_repository_dir, mygit_merge};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn merge_unknown_branch(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    mygit_merge(committed_repository_dir.path(), "missing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch does not exist: missing"));

    Ok(())
}
