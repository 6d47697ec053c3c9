use crate::common::command::run_gogit_command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reject_missing_search_path(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let missing = workspace_dir.path().join("missing");
    let missing = missing.to_string_lossy().into_owned();

    run_gogit_command(workspace_dir.path(), &["all", missing.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "File path given, \"{missing}\", is not a valid path"
        )));

    Ok(())
}

#[rstest]
fn reject_file_as_search_path(
    #[from(crate::common::command::workspace_dir)] workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = workspace_dir.child("plain.txt");
    file.write_str("not a directory")?;

    run_gogit_command(workspace_dir.path(), &["all", "plain.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid path"));

    Ok(())
}
