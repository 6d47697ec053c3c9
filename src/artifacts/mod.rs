//! Records and parsers for the project summary
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `log`: Latest commit parsing and commit age
//! - `project`: Repository references and per-project reports
//! - `status`: Working tree status parsing

pub mod core;
pub mod log;
pub mod project;
pub mod status;
