use anyhow::Result;
use chores_core::TaskRunner;
use colored::*;

pub fn execute(runner: &TaskRunner) -> Result<()> {
    println!("{}", "Tasks".bold().underline());

    let mut tasks: Vec<_> = runner.tasks().collect();
    tasks.sort_by(|a, b| a.id.cmp(&b.id));

    if tasks.is_empty() {
        println!("  {}", "No tasks registered".dimmed());
        return Ok(());
    }

    for task in tasks {
        // Pad before styling; escape codes would throw off the column width.
        let id = format!("{:<16}", task.id.to_string());
        println!("{} {}", id.cyan(), task.description.dimmed());
    }

    Ok(())
}
