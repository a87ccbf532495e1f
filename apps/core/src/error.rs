use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A send was attempted with empty or whitespace-only input. Nothing is recorded.
    #[error("Message is empty")]
    EmptyMessage,

    /// A send was attempted while the assistant is still composing a reply.
    #[error("A reply is already pending for this session")]
    ReplyPending,

    /// An error indicating that the per-session send limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The session was closed before the operation could complete.
    #[error("Session is closed")]
    SessionClosed,

    /// Represents data validation errors (e.g., empty sign-in fields).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents static configuration errors (e.g., a malformed response pool).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Task failed: {}", err))
    }
}
