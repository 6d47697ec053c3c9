use crate::artifacts::log::commit_summary::LatestCommit;
use crate::artifacts::project::repository_ref::RepositoryRef;
use crate::artifacts::status::status_info::StatusInfo;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, new)]
pub struct ProjectReport {
    repository: RepositoryRef,
    status: StatusInfo,
    latest_commit: LatestCommit,
}

impl ProjectReport {
    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    pub fn status(&self) -> &StatusInfo {
        &self.status
    }

    pub fn latest_commit(&self) -> &LatestCommit {
        &self.latest_commit
    }
}

/// A repository whose git output could not be turned into a report
#[derive(Debug, new)]
pub struct ExtractionFailure {
    path: PathBuf,
    error: anyhow::Error,
}

impl ExtractionFailure {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.path.display(), self.error)
    }
}

/// Outcome of one collection pass over a search root
#[derive(Debug, Default)]
pub struct Collection {
    pub(crate) discovered: usize,
    pub(crate) reports: Vec<ProjectReport>,
    pub(crate) failures: Vec<ExtractionFailure>,
}

impl Collection {
    /// Number of repository roots found before any filtering
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    pub fn reports(&self) -> &[ProjectReport] {
        &self.reports
    }

    pub fn failures(&self) -> &[ExtractionFailure] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.discovered == 0
    }
}
