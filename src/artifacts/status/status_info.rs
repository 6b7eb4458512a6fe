/// Result of a status scan
///
/// `modified` only ever names files that also have a staged snapshot; a file
/// that was never staged is not reported, whatever its content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    /// Staged snapshot names, sorted
    pub staged: Vec<String>,
    /// Working-directory files whose content differs from their staged snapshot, sorted
    pub modified: Vec<String>,
}

impl StatusInfo {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty()
    }
}
