use crate::common::command::{run_gogit_command, stdout_of};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_message_when_no_projects_are_found(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir.child("just/some/folders").create_dir_all()?;
    let root = workspace_dir.path().canonicalize()?;

    let stdout = stdout_of(&mut run_gogit_command(workspace_dir.path(), &[]))?;

    let expected = format!("\n  No Git projects found in \"{}\"\n\n", root.display());
    assert_eq!(stdout, expected);

    Ok(())
}
