//! Task identifiers and descriptors
//!
//! Tasks are keyed by a structured id (an optional namespace plus a short
//! name) rather than by raw colon-delimited strings, so prerequisite
//! resolution never re-parses text.

use std::fmt;

use crate::reporter::JobReporter;
use crate::types::ChoresResult;

/// Structured task key, written `namespace:name` (or a bare `name` for
/// tasks outside any namespace, such as `default`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    pub namespace: Option<String>,
    pub name: String,
}

impl TaskId {
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            name: name.to_string(),
        }
    }

    pub fn bare(name: &str) -> Self {
        Self {
            namespace: None,
            name: name.to_string(),
        }
    }

    /// Parse an id from its textual form. Splits on the first `:`; text
    /// without a colon is a bare name. Parsing itself never fails — an id
    /// that matches no registered task surfaces as `UnknownTask` at run
    /// time instead.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::bare(raw),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}:{}", namespace, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// The unit of work a task performs. Actions only side-effect (spawning
/// subprocesses, recording jobs); they carry no inputs or outputs.
pub type Action = Box<dyn Fn(&mut JobReporter) -> ChoresResult<()>>;

/// A named, orderable unit of build automation.
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub prerequisites: Vec<TaskId>,
    pub action: Action,
}

impl Task {
    pub fn new<F>(id: &str, description: &str, prerequisites: &[&str], action: F) -> Self
    where
        F: Fn(&mut JobReporter) -> ChoresResult<()> + 'static,
    {
        Self {
            id: TaskId::parse(id),
            description: description.to_string(),
            prerequisites: prerequisites.iter().map(|raw| TaskId::parse(raw)).collect(),
            action: Box::new(action),
        }
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("prerequisites", &self.prerequisites)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_namespaced_id() {
        let id = TaskId::parse("build:lib");
        assert_eq!(id.namespace.as_deref(), Some("build"));
        assert_eq!(id.name, "lib");
        assert_eq!(id.to_string(), "build:lib");
    }

    #[test]
    fn test_parse_bare_id() {
        let id = TaskId::parse("default");
        assert_eq!(id.namespace, None);
        assert_eq!(id.name, "default");
        assert_eq!(id.to_string(), "default");
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let id = TaskId::parse("build:lib:extra");
        assert_eq!(id.namespace.as_deref(), Some("build"));
        assert_eq!(id.name, "lib:extra");
    }

    #[test]
    fn test_task_new_parses_prerequisites() {
        let task = Task::new("build:envvars", "build", &["build:rust", "build:lib"], |_| {
            Ok(())
        });
        assert_eq!(task.prerequisites.len(), 2);
        assert_eq!(task.prerequisites[0], TaskId::new("build", "rust"));
        assert_eq!(task.prerequisites[1], TaskId::new("build", "lib"));
    }
}
