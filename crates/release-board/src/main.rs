//! Release Board CLI.
//!
//! Creates a GitHub Project for a release and populates it with tasks from
//! the local task database, using the `gh` CLI for every remote change.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use release_board::commands::{CreateBoardCommand, GreetCommand};
use release_board::config::{BoardConfig, ConfigOverrides};

/// Release Board - GitHub Project setup for releases.
#[derive(Parser)]
#[command(
    name = "release-board",
    version,
    about = "Create a GitHub project board for a release and populate it with tasks"
)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML configuration file.
    #[arg(long, global = true, value_name = "FILE", env = "RELEASE_BOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Project owner (user or organization login, or @me).
    #[arg(long, global = true, env = "RELEASE_BOARD_OWNER")]
    owner: Option<String>,

    /// Task database file.
    #[arg(long, global = true, value_name = "FILE", env = "RELEASE_BOARD_TASKS")]
    tasks: Option<PathBuf>,

    /// GitHub CLI executable.
    #[arg(long, global = true, value_name = "PATH", env = "RELEASE_BOARD_GH")]
    gh: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project, add its custom fields, and upload every task.
    CreateBoard(CreateBoardCommand),

    /// Prompt for a first and last name and echo them.
    #[command(visible_alias = "wizard")]
    Greet(GreetCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "info,release_board=debug"
    } else {
        "warn,release_board=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = BoardConfig::load(
        cli.config.as_deref(),
        ConfigOverrides {
            owner: cli.owner,
            tasks_file: cli.tasks,
            gh_program: cli.gh,
        },
    )?;

    match cli.command {
        Commands::CreateBoard(cmd) => cmd.run(&config),
        Commands::Greet(cmd) => cmd.run(),
    }
}
