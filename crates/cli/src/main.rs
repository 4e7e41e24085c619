use anyhow::Result;
use chores_core::catalog;
use clap::{Parser, Subcommand};

mod commands;

/// Chores - build automation for the envvars library
#[derive(Parser)]
#[command(name = "chores")]
#[command(about = "Build, test, lint and clean tasks for the envvars library")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered tasks
    List,
    /// Run a task by name (the full lint-test-build chain when omitted)
    Run {
        /// Task in "namespace:name" format, e.g. "build:envvars"
        task: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tasks are registered once, up front; commands only resolve and run.
    let runner = catalog::standard();

    match cli.command {
        Some(Commands::List) => commands::list::execute(&runner),
        Some(Commands::Run { task }) => commands::run::execute(&runner, task.as_deref()),
        None => commands::run::execute(&runner, None),
    }
}
