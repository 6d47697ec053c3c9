use crate::common::command::{init_project, run_gogit_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_project_without_commits(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    init_project(workspace_dir.path(), "fresh");

    let stdout = stdout_of(&mut run_gogit_command(workspace_dir.path(), &[]))?;

    assert!(stdout.contains(" fresh \n"));
    assert!(stdout.contains("  Current branch does not have any commits yet\n"));
    assert!(!stdout.contains(" ! "));

    Ok(())
}
