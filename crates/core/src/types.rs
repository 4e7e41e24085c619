use thiserror::Error;

/// The main error type for chores operations
#[derive(Debug, Error)]
pub enum ChoresError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("task '{0}' is not registered")]
    UnknownTask(String),

    #[error("command '{command}' failed with exit code {code}")]
    Command { command: String, code: i32 },
}

/// Result type alias for chores operations
pub type ChoresResult<T> = Result<T, ChoresError>;
