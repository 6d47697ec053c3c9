use anyhow::Result;
use clap::Parser;
use gogit::CollectionStrategy;
use gogit::areas::git::SystemGit;
use gogit::areas::projects::Projects;
use gogit::artifacts::core::OutputTarget;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GOGIT_LOG";

#[derive(Parser)]
#[command(
    name = "gogit",
    version = "0.1.0",
    about = "Summarize the Git projects found under a directory",
    long_about = "Walks the given directory for Git projects and prints, for each one, \
    the current branch, how it compares to its upstream, the latest commit \
    and the files that were changed or are untracked.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        index = 1,
        value_enum,
        env = "GOGIT_STRATEGY",
        default_value_t = CollectionStrategy::All,
        help = "The project search strategy"
    )]
    strategy: CollectionStrategy,
    #[arg(
        index = 2,
        env = "GOGIT_PATH",
        help = "The projects parent directory (defaults to the current directory)"
    )]
    path: Option<String>,
    #[arg(
        long,
        env = "GOGIT_GIT",
        default_value = "git",
        help = "The git executable to run"
    )]
    git: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };

    let output = OutputTarget::detect();
    let projects = Projects::new(&path, output.writer(), Box::new(SystemGit::new(cli.git)))?;

    tracing::debug!(root = %projects.path().display(), strategy = %cli.strategy, "collecting projects");

    projects.summary(cli.strategy)?;
    drop(projects);

    output.finish()
}
