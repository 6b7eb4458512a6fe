mod show_positional_diff_for_staged_file;
mod show_diff_for_file_deleted_from_workspace;
