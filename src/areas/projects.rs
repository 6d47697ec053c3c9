use crate::CollectionStrategy;
use crate::areas::git::GitRunner;
use crate::areas::workspace::Workspace;
use crate::artifacts::log::commit_summary::LatestCommit;
use crate::artifacts::project::project_report::{Collection, ExtractionFailure, ProjectReport};
use crate::artifacts::project::repository_ref::RepositoryRef;
use crate::artifacts::status::inspector::Inspector;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

const UNBORN_BRANCH_PHRASE: &str = "does not have any commits";

/// Every Git project below a search root
pub struct Projects {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    git: Box<dyn GitRunner>,
    workspace: Workspace,
}

impl Projects {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        git: Box<dyn GitRunner>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .ok()
            .filter(|path| path.is_dir())
            .ok_or_else(|| anyhow::anyhow!("File path given, \"{}\", is not a valid path", path))?;

        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Projects {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            git,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn git(&self) -> &dyn GitRunner {
        self.git.as_ref()
    }

    /// Locate every repository, build its report and keep the ones the
    /// strategy selects. A repository whose git output cannot be parsed is
    /// recorded as a failure and the remaining ones are still processed.
    pub fn collect(&self, strategy: CollectionStrategy) -> Collection {
        let repositories = self.workspace.locate_repositories();
        let inspector = Inspector::new(self.git());

        let mut collection = Collection {
            discovered: repositories.len(),
            ..Default::default()
        };

        for repository in repositories {
            let path = repository.path().to_path_buf();

            match self.build_report(repository, &inspector, strategy) {
                Ok(report) if strategy.retains(report.status().has_changes()) => {
                    collection.reports.push(report);
                }
                Ok(_) => {
                    tracing::debug!(path = %path.display(), %strategy, "project filtered out");
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), "failed to summarize project: {:#}", error);
                    collection.failures.push(ExtractionFailure::new(path, error));
                }
            }
        }

        collection
    }

    fn build_report(
        &self,
        repository: RepositoryRef,
        inspector: &Inspector<'_>,
        strategy: CollectionStrategy,
    ) -> anyhow::Result<ProjectReport> {
        let status = inspector.inspect(repository.path(), strategy)?;
        let latest_commit = self.latest_commit(repository.path())?;

        Ok(ProjectReport::new(repository, status, latest_commit))
    }

    // git exits non-zero on an unborn branch but prints nothing, which parses
    // as no commits. Any other failure is reported.
    fn latest_commit(&self, repository: &Path) -> anyhow::Result<LatestCommit> {
        let log = self.git.latest_log(repository)?;

        if !log.success && !log.stderr.contains(UNBORN_BRANCH_PHRASE) {
            anyhow::bail!(
                "git log failed in {}: {}",
                repository.display(),
                log.stderr.trim()
            );
        }

        LatestCommit::parse(&log.stdout)
            .with_context(|| format!("unexpected git log output in {}", repository.display()))
    }
}
