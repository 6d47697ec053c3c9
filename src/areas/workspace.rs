use crate::artifacts::project::repository_ref::{GIT_DIR_NAME, RepositoryRef};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Every directory under the workspace root (the root included) that has a
    /// `.git` directory among its immediate children, sorted by base name.
    ///
    /// Nested repositories are reported on their own. Unreadable entries are
    /// skipped, and symbolic links are not followed so link cycles cannot
    /// trap the walk.
    pub fn locate_repositories(&self) -> Vec<RepositoryRef> {
        let mut repositories = WalkDir::new(&self.path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_git_dir(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(error) => {
                    tracing::debug!(%error, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| match RepositoryRef::try_from_dir(entry.path()) {
                Ok(repository) => repository,
                Err(error) => {
                    tracing::debug!(path = %entry.path().display(), %error, "skipping unreadable directory");
                    None
                }
            })
            .inspect(|repository| {
                tracing::debug!(path = %repository.path().display(), "found repository");
            })
            .collect::<Vec<_>>();

        // stable, so equal names keep walk order
        repositories.sort_by(|a, b| a.name().cmp(b.name()));

        repositories
    }

    // The internals of a .git directory never hold a working tree
    fn is_git_dir(entry: &DirEntry) -> bool {
        entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == GIT_DIR_NAME
    }
}
