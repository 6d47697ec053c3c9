//! Per-project records assembled by the collector
//!
//! - `repository_ref`: A discovered repository root
//! - `project_report`: Status and latest commit for one repository, plus the
//!   collection that groups reports with the repositories that failed

pub mod project_report;
pub mod repository_ref;
