//! Error types for the operation engine.
//!
//! None of these reach the user: action failures are captured as
//! `OperationOutcome::Failure` and rejected presses are silent.

use async_button_core::OperationId;
use thiserror::Error;

/// Error type for tracker bookkeeping.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The id was never issued by this registry (or was pruned).
    #[error("Unknown operation {0}")]
    UnknownOperation(OperationId),

    /// A second completion for the same operation.
    #[error("Operation {0} already completed")]
    AlreadyCompleted(OperationId),

    /// The supervising task did not finish.
    #[error("Operation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type alias for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let id = OperationId::new();
        let err = TrackerError::AlreadyCompleted(id);
        assert_eq!(err.to_string(), format!("Operation {} already completed", id));
    }
}
