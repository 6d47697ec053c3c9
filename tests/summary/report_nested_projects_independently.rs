use crate::common::command::{init_committed_project, run_gogit_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_nested_projects_independently(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let outer_dir = init_committed_project(workspace_dir.path(), "outer");
    init_committed_project(&outer_dir.join("vendor"), "inner");

    let stdout = stdout_of(&mut run_gogit_command(workspace_dir.path(), &["latest"]))?;

    let inner_at = stdout.find(" inner \n").ok_or("inner header missing")?;
    let outer_at = stdout.find(" outer \n").ok_or("outer header missing")?;
    assert!(inner_at < outer_at);

    Ok(())
}
