//! Porcelain commands (user-facing output)
//!
//! ## Commands
//!
//! - `summary`: Print the colorized per-project report

pub mod summary;
