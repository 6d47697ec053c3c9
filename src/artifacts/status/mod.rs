//! Working tree status of a single repository
//!
//! This module turns the output of `git status` into a structured record.
//!
//! ## Components
//!
//! - `file_change`: Change-type table and per-file change entries
//! - `status_info`: The status record and the parsers for both output forms
//! - `inspector`: Runs git against a repository and assembles the record

pub mod file_change;
pub mod inspector;
pub mod status_info;
