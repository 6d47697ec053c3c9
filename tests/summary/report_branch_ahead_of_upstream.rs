use crate::common::command::{git_commit, init_committed_project, run_git_command, run_gogit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_branch_ahead_of_upstream(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let upstream_dir = init_committed_project(workspace_dir.path(), "upstream");
    run_git_command(workspace_dir.path(), &["clone", "--quiet", "upstream", "local"])
        .assert()
        .success();
    let local_dir = workspace_dir.path().join("local");
    write_file(FileSpec::new(local_dir.join("3.txt"), "three".to_string()));
    git_commit(&local_dir, "Local only commit");

    let stdout = stdout_of(&mut run_gogit_command(workspace_dir.path(), &["changed"]))?;

    assert!(
        stdout.contains("  Your branch is ahead of 'origin/main' by 1 commit. (↑1)\n"),
        "unexpected output:\n{stdout}"
    );
    // the upstream has no upstream of its own and a clean tree
    assert!(!stdout.contains(" upstream \n"));
    assert!(upstream_dir.exists());

    Ok(())
}
