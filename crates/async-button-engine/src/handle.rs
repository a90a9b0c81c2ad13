//! Handles to started operations.

use async_button_core::{OperationId, OperationOutcome};
use tokio::task::JoinHandle;

use crate::error::TrackerResult;

/// Handle returned for an accepted start request.
///
/// Dropping the handle does not cancel the operation; it always runs to
/// completion.
#[derive(Debug)]
pub struct OperationHandle {
    id: OperationId,
    task: JoinHandle<OperationOutcome>,
}

impl OperationHandle {
    pub(crate) fn new(id: OperationId, task: JoinHandle<OperationOutcome>) -> Self {
        Self { id, task }
    }

    /// Id of the operation in the tracker's registry.
    pub fn id(&self) -> OperationId {
        self.id
    }

    /// Whether the operation and its feedback sequence have finished.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait until the operation has completed and its feedback has been
    /// dispatched.
    pub async fn wait(self) -> TrackerResult<OperationOutcome> {
        Ok(self.task.await?)
    }
}
