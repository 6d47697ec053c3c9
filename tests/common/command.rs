use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub const DEFAULT_BRANCH: &str = "main";
pub const AUTHOR_NAME: &str = "fake_user";

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_gogit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gogit").expect("Failed to find gogit binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("GOGIT_STRATEGY");
    cmd.env_remove("GOGIT_PATH");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.envs(vec![
        ("GIT_CONFIG_NOSYSTEM", "1"),
        ("GIT_CONFIG_GLOBAL", "/dev/null"),
        ("GIT_AUTHOR_NAME", AUTHOR_NAME),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"),
        ("GIT_COMMITTER_NAME", AUTHOR_NAME),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_DATE", "2023-01-01 12:00:00 +0000"),
    ]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Initialize an empty project on the default branch
pub fn init_project(parent: &Path, name: &str) -> PathBuf {
    let project_dir = parent.join(name);
    std::fs::create_dir_all(&project_dir)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", project_dir, e));

    run_git_command(&project_dir, &["init", "--quiet"])
        .assert()
        .success();
    run_git_command(
        &project_dir,
        &["symbolic-ref", "HEAD", &format!("refs/heads/{DEFAULT_BRANCH}")],
    )
    .assert()
    .success();

    project_dir
}

pub fn git_commit(dir: &Path, message: &str) {
    run_git_command(dir, &["add", "--all"]).assert().success();
    run_git_command(dir, &["commit", "--quiet", "-m", message])
        .assert()
        .success();
}

/// Initialize a project holding one committed file, `1.txt`
pub fn init_committed_project(parent: &Path, name: &str) -> PathBuf {
    let project_dir = init_project(parent, name);

    write_file(FileSpec::new(project_dir.join("1.txt"), "one".to_string()));
    git_commit(&project_dir, "Initial commit");

    project_dir
}

pub fn head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_git_command(dir, &["rev-parse", "HEAD"]).output()?;

    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();

    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}
