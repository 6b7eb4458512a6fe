mod show_log_with_no_commits;
