//! Data structures and algorithms
//!
//! - `branch`: Branch name validation
//! - `diff`: Positional line diff
//! - `log`: Commit history enumeration
//! - `objects`: Commit records and identifiers
//! - `status`: Working tree status

pub mod branch;
pub mod diff;
pub mod log;
pub mod objects;
pub mod status;
