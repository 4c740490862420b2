use serde::Serialize;

/// Structured error type for machine-consumable CLI output.
/// Each variant maps to a specific exit code and JSON stderr output.
#[derive(Debug, Serialize)]
#[serde(tag = "error", content = "detail")]
pub enum DeckError {
    /// Task is in a state that conflicts with the requested operation (exit 2)
    StateConflict { task: String, state: String, message: String },
    /// Referenced task does not exist (exit 3)
    NotFound { message: String },
    /// Input validation failed (exit 4)
    Validation { message: String },
}

impl DeckError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::StateConflict { .. } => 2,
            Self::NotFound { .. } => 3,
            Self::Validation { .. } => 4,
        }
    }
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StateConflict { task, state, message } => {
                write!(f, "Task '{}' is {} — {}", task, state, message)
            }
            Self::NotFound { message } => write!(f, "{}", message),
            Self::Validation { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for DeckError {}
