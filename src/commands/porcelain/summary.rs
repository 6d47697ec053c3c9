use crate::CollectionStrategy;
use crate::areas::projects::Projects;
use crate::artifacts::log::age::CommitAge;
use crate::artifacts::log::commit_summary::LatestCommit;
use crate::artifacts::project::project_report::{Collection, ProjectReport};
use chrono::{DateTime, FixedOffset};
use colored::Colorize;
use std::io::Write;

const COMMIT_DATE_FORMAT: &str = "%m/%d/%Y %H:%M";

impl Projects {
    pub fn summary(&self, strategy: CollectionStrategy) -> anyhow::Result<()> {
        let collection = self.collect(strategy);

        self.print_summary(&collection, chrono::Local::now().fixed_offset())
    }

    pub fn print_summary(
        &self,
        collection: &Collection,
        now: DateTime<FixedOffset>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer())?;

        if collection.is_empty() {
            writeln!(
                self.writer(),
                "  No Git projects found in \"{}\"",
                self.path().display()
            )?;
            writeln!(self.writer())?;
            return Ok(());
        }

        for report in collection.reports() {
            self.print_project(report, now)?;
        }

        for failure in collection.failures() {
            writeln!(
                self.writer(),
                "  {} {}",
                "!".yellow().bold(),
                failure.to_string().yellow()
            )?;
        }

        Ok(())
    }

    fn print_project(&self, report: &ProjectReport, now: DateTime<FixedOffset>) -> anyhow::Result<()> {
        let repository = report.repository();
        let status = report.status();

        writeln!(
            self.writer(),
            "{}",
            format!(" {} ", repository.name()).white().on_cyan()
        )?;
        writeln!(
            self.writer(),
            "  {} {}",
            status.branch_name().cyan(),
            repository.path().display()
        )?;

        if status.has_diverged_from_upstream() {
            let divergence = status.divergence();
            if divergence.is_empty() {
                writeln!(self.writer(), "  {}", status.branch_status())?;
            } else {
                writeln!(
                    self.writer(),
                    "  {} ({})",
                    status.branch_status(),
                    divergence.to_string().bold()
                )?;
            }
        }

        writeln!(
            self.writer(),
            "  {}",
            Self::latest_commit_line(report.latest_commit(), now)
        )?;

        if !status.modified_files().is_empty() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "  Changes (staged and non-staged):")?;
            for file in status.modified_files() {
                writeln!(self.writer(), "\t{}", file)?;
            }
        }

        if !status.untracked_files().is_empty() {
            writeln!(self.writer())?;
            writeln!(self.writer(), "  Untracked Files:")?;
            for file in status.untracked_files() {
                writeln!(self.writer(), "\t{}", file.red())?;
            }
        }

        writeln!(self.writer())?;

        Ok(())
    }

    fn latest_commit_line(latest_commit: &LatestCommit, now: DateTime<FixedOffset>) -> String {
        match latest_commit {
            LatestCommit::Commit(commit) => {
                let age = CommitAge::between(commit.date(), now);
                format!(
                    "Latest {} by {} ({}) {}: {}",
                    age.to_string().bold(),
                    commit.author().bold(),
                    commit.date().format(COMMIT_DATE_FORMAT),
                    commit.short_hash().magenta(),
                    commit.message()
                )
            }
            LatestCommit::NoCommits => "Current branch does not have any commits yet".to_string(),
        }
    }
}
