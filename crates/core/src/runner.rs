//! Task registry and execution
//!
//! The runner holds every registered task and executes one by id:
//! prerequisites first, depth-first in declared order, then the task's own
//! action. Nothing is memoized — a task reachable through several
//! prerequisite paths runs once per path — and prerequisite cycles are not
//! detected.

use std::collections::HashMap;

use crate::reporter::JobReporter;
use crate::task::{Task, TaskId};
use crate::types::{ChoresError, ChoresResult};

/// Registry of named tasks, keyed by structured id.
#[derive(Debug, Default)]
pub struct TaskRunner {
    tasks: HashMap<TaskId, Task>,
}

impl TaskRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task to the registry. Registering an id twice silently
    /// replaces the earlier task (last registration wins).
    pub fn register(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Run the named task: every prerequisite in declared order, then the
    /// task's own action. The first error halts the run and propagates;
    /// no entry is recorded for a failed step.
    pub fn run(&self, id: &TaskId, reporter: &mut JobReporter) -> ChoresResult<()> {
        let task = self
            .tasks
            .get(id)
            .ok_or_else(|| ChoresError::UnknownTask(id.to_string()))?;

        for prerequisite in &task.prerequisites {
            self.run(prerequisite, reporter)?;
        }

        (task.action)(reporter)
    }
}
