use anyhow::Context;
use derive_new::new;
use std::path::Path;
use std::process::Command;

// Every invocation is pinned to the C locale and a neutral configuration so
// the human-readable output keeps the wording the parsers match against.
const PINNED_ENV: [(&str, &str); 3] = [("LC_ALL", "C"), ("LANG", "C"), ("LANGUAGE", "")];
const PINNED_CONFIG: [&str; 5] = [
    "color.ui=never",
    "core.quotePath=false",
    "status.short=false",
    "status.branch=false",
    "log.showSignature=false",
];

/// Captured result of a single, fully reaped git invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Seam between the extractors and the external version-control tool
pub trait GitRunner {
    fn run(&self, repository: &Path, args: &[&str]) -> anyhow::Result<GitOutput>;

    fn status(&self, repository: &Path) -> anyhow::Result<GitOutput> {
        self.run(repository, &["status"])
    }

    fn status_porcelain(&self, repository: &Path) -> anyhow::Result<GitOutput> {
        self.run(repository, &["status", "--porcelain"])
    }

    fn latest_log(&self, repository: &Path) -> anyhow::Result<GitOutput> {
        self.run(
            repository,
            &[
                "log",
                "-n",
                "1",
                "--no-color",
                "--no-decorate",
                "--pretty=medium",
                "--date=default",
            ],
        )
    }
}

/// Runs the `git` binary as a blocking subprocess
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        SystemGit {
            program: program.into(),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        SystemGit::new("git")
    }
}

impl GitRunner for SystemGit {
    fn run(&self, repository: &Path, args: &[&str]) -> anyhow::Result<GitOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(repository).envs(PINNED_ENV);
        cmd.arg("--no-optional-locks");
        for config in PINNED_CONFIG {
            cmd.arg("-c").arg(config);
        }
        cmd.args(args);

        tracing::debug!(repository = %repository.display(), ?args, "running git");

        let output = cmd.output().with_context(|| {
            format!(
                "failed to run `{} {}` in {}",
                self.program,
                args.join(" "),
                repository.display()
            )
        })?;

        Ok(GitOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}
