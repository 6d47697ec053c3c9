use crate::common::command::{init_committed_project, run_gogit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn changed_strategy_skips_clean_projects(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    init_committed_project(workspace_dir.path(), "clean");
    let dirty_dir = init_committed_project(workspace_dir.path(), "dirty");
    write_file(FileSpec::new(dirty_dir.join("1.txt"), "changed".to_string()));

    let stdout = stdout_of(&mut run_gogit_command(workspace_dir.path(), &["changed"]))?;

    assert!(stdout.contains(" dirty \n"));
    assert!(!stdout.contains(" clean \n"));

    Ok(())
}

#[rstest]
fn changed_strategy_with_only_clean_projects_prints_nothing(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    init_committed_project(workspace_dir.path(), "clean");

    let stdout = stdout_of(&mut run_gogit_command(workspace_dir.path(), &["changed"]))?;

    assert_eq!(stdout, "\n");

    Ok(())
}
