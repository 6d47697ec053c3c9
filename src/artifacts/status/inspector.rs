use crate::CollectionStrategy;
use crate::areas::git::{GitOutput, GitRunner};
use crate::artifacts::status::status_info::StatusInfo;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

#[derive(new)]
pub struct Inspector<'g> {
    git: &'g dyn GitRunner,
}

impl<'g> Inspector<'g> {
    pub fn inspect(
        &self,
        repository: &Path,
        strategy: CollectionStrategy,
    ) -> anyhow::Result<StatusInfo> {
        let status = self.git.status(repository)?;
        Self::ensure_output(&status, repository, "status")?;

        let porcelain = if strategy.collects_file_changes() {
            let porcelain = self.git.status_porcelain(repository)?;
            Self::ensure_output(&porcelain, repository, "status --porcelain")?;
            Some(porcelain)
        } else {
            None
        };

        StatusInfo::parse(
            &status.stdout,
            porcelain.as_ref().map(|output| output.stdout.as_str()),
        )
        .with_context(|| format!("unexpected git status output in {}", repository.display()))
    }

    fn ensure_output(output: &GitOutput, repository: &Path, command: &str) -> anyhow::Result<()> {
        if output.success || !output.stdout.trim().is_empty() {
            return Ok(());
        }

        anyhow::bail!(
            "git {} failed in {}: {}",
            command,
            repository.display(),
            output.stderr.trim()
        )
    }
}
