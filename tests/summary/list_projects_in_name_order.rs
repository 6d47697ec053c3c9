use crate::common::command::{init_committed_project, run_gogit_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_projects_in_name_order(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    init_committed_project(workspace_dir.path(), "projB");
    let proj_a = init_committed_project(workspace_dir.path(), "projA");
    std::fs::create_dir_all(proj_a.join("subdir"))?;

    let stdout = stdout_of(&mut run_gogit_command(workspace_dir.path(), &["all"]))?;

    let proj_a_at = stdout.find(" projA \n").ok_or("projA header missing")?;
    let proj_b_at = stdout.find(" projB \n").ok_or("projB header missing")?;
    assert!(proj_a_at < proj_b_at, "projects out of order:\n{stdout}");
    assert!(!stdout.contains(" subdir \n"));

    Ok(())
}
