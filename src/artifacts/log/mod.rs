//! Latest commit information for git log
//!
//! - `commit_summary`: Parses the newest commit block of `git log`
//! - `age`: Humanized time elapsed since a commit

pub mod age;
pub mod commit_summary;
