//! gogit: summarize the state of every Git project under a directory
//!
//! The pipeline walks a directory tree for repository roots, asks `git` for the
//! status and latest commit of each one, and filters the resulting reports by a
//! [`CollectionStrategy`] before handing them to the summary printer.

pub mod areas;
pub mod artifacts;
pub mod commands;

/// Which of the discovered projects end up in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CollectionStrategy {
    /// Returns a summary of all Git projects found in the given parent search directory
    #[default]
    All,
    /// Returns only Git projects in which a change was detected (i.e. modified and untracked files)
    Changed,
    /// Returns all Git projects ignoring changes (i.e. useful for getting basic project information such as latest commit)
    Latest,
}

impl CollectionStrategy {
    /// Whether per-file changes should be collected from the porcelain status
    pub fn collects_file_changes(&self) -> bool {
        *self != CollectionStrategy::Latest
    }

    /// Whether a project with the given change flag is kept in the report
    pub fn retains(&self, has_changes: bool) -> bool {
        match self {
            CollectionStrategy::All | CollectionStrategy::Latest => true,
            CollectionStrategy::Changed => has_changes,
        }
    }
}

impl std::fmt::Display for CollectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CollectionStrategy::All => "all",
            CollectionStrategy::Changed => "changed",
            CollectionStrategy::Latest => "latest",
        };
        write!(f, "{}", name)
    }
}
