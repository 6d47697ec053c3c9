//! Components that reach outside the process
//!
//! - `git`: The external git tool behind the `GitRunner` seam
//! - `projects`: Collects a report for every project under the search root
//! - `workspace`: Directory walk that locates repository roots

pub mod git;
pub mod projects;
pub mod workspace;
