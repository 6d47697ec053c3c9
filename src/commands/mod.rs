//! Command implementations
//!
//! - `porcelain`: User-facing commands that print to the projects writer

pub mod porcelain;
