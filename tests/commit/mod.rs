mod commit_with_empty_staging_fails;
mod sequential_commits_link_parents;
