use crate::common::command::{init_committed_project, run_gogit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn latest_strategy_omits_file_changes(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let project_dir = init_committed_project(workspace_dir.path(), "busy");
    write_file(FileSpec::new(project_dir.join("1.txt"), "changed".to_string()));
    write_file(FileSpec::new(project_dir.join("new.txt"), "new".to_string()));

    let stdout = stdout_of(&mut run_gogit_command(workspace_dir.path(), &["latest"]))?;

    assert!(stdout.contains(" busy \n"));
    assert!(stdout.contains("Initial commit"));
    assert!(!stdout.contains("Changes (staged and non-staged):"));
    assert!(!stdout.contains("Untracked Files:"));

    Ok(())
}
