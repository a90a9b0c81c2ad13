//! Operation lifecycle types.

use std::fmt;
use uuid::Uuid;

use crate::error::ActionError;

/// Unique identifier for one invocation of a button's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId(Uuid);

impl OperationId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op:{}", self.0)
    }
}

/// How a finished operation resolved.
#[derive(Debug, Clone)]
pub enum OperationOutcome {
    Success,
    Failure(ActionError),
}

impl OperationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationOutcome::Success)
    }

    /// The error, if the operation failed.
    pub fn error(&self) -> Option<&ActionError> {
        match self {
            OperationOutcome::Success => None,
            OperationOutcome::Failure(error) => Some(error),
        }
    }
}

impl From<Result<(), ActionError>> for OperationOutcome {
    fn from(result: Result<(), ActionError>) -> Self {
        match result {
            Ok(()) => OperationOutcome::Success,
            Err(error) => OperationOutcome::Failure(error),
        }
    }
}

/// Lifecycle state of an operation. `Completed` is terminal.
#[derive(Debug, Clone)]
pub enum OperationState {
    Loading,
    Completed(OperationOutcome),
}

impl OperationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, OperationState::Loading)
    }
}

/// One tracked invocation.
#[derive(Debug, Clone)]
pub struct Operation {
    pub id: OperationId,
    pub state: OperationState,
}

impl Operation {
    /// Create an operation in the loading state.
    pub fn loading(id: OperationId) -> Self {
        Self {
            id,
            state: OperationState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The outcome, once completed.
    pub fn outcome(&self) -> Option<&OperationOutcome> {
        match &self.state {
            OperationState::Loading => None,
            OperationState::Completed(outcome) => Some(outcome),
        }
    }
}
