use anyhow::Result;
use chores_core::{catalog, JobReporter, TaskId, TaskRunner};
use colored::*;

pub fn execute(runner: &TaskRunner, task: Option<&str>) -> Result<()> {
    let id = TaskId::parse(task.unwrap_or(catalog::DEFAULT_TASK));

    println!("{} {}", "Running task".bold(), id.to_string().cyan());
    println!();

    // One reporter per invocation, threaded through every task action.
    let mut reporter = JobReporter::new();
    runner.run(&id, &mut reporter)?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        "All tasks completed successfully!".green().bold()
    );

    Ok(())
}
