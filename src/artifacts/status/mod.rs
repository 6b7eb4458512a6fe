//! Working tree status
//!
//! - `status_info`: staged names and files modified since they were staged

pub mod status_info;
