pub mod branch_name;

/// Git's ref-name rules; branch records are stored flat, so `/` is rejected as well
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\.\.|/|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
