//! Operation Registry
//!
//! Stores every operation a button has started, keyed by id. Completed
//! operations stay in the registry until `prune_completed` is called.

use std::collections::HashMap;

use async_button_core::{Operation, OperationId, OperationOutcome, OperationState};

use crate::error::{TrackerError, TrackerResult};

/// Map of operation id to operation.
#[derive(Debug, Default)]
pub struct OperationRegistry {
    operations: HashMap<OperationId, Operation>,
}

impl OperationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id and record it as loading.
    pub fn begin(&mut self) -> OperationId {
        let id = OperationId::new();
        self.operations.insert(id, Operation::loading(id));
        id
    }

    /// Move a loading operation to its terminal state.
    pub fn complete(&mut self, id: OperationId, outcome: OperationOutcome) -> TrackerResult<()> {
        let operation = self
            .operations
            .get_mut(&id)
            .ok_or(TrackerError::UnknownOperation(id))?;

        if !operation.is_loading() {
            return Err(TrackerError::AlreadyCompleted(id));
        }

        operation.state = OperationState::Completed(outcome);
        Ok(())
    }

    /// True iff at least one operation is loading.
    pub fn is_loading(&self) -> bool {
        self.operations.values().any(Operation::is_loading)
    }

    /// Number of operations currently loading.
    pub fn loading_count(&self) -> usize {
        self.operations.values().filter(|op| op.is_loading()).count()
    }

    pub fn get(&self, id: &OperationId) -> Option<&Operation> {
        self.operations.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Remove all completed operations. Returns how many were removed.
    pub fn prune_completed(&mut self) -> usize {
        let before = self.operations.len();
        self.operations.retain(|_, op| op.is_loading());
        before - self.operations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_button_core::ActionError;

    #[test]
    fn test_begin_inserts_loading() {
        let mut registry = OperationRegistry::new();
        assert!(!registry.is_loading());

        let id = registry.begin();
        assert_eq!(registry.len(), 1);
        assert!(registry.is_loading());
        assert!(registry.get(&id).unwrap().is_loading());
    }

    #[test]
    fn test_loading_tracks_any_entry() {
        let mut registry = OperationRegistry::new();
        let first = registry.begin();
        let second = registry.begin();
        assert_ne!(first, second);
        assert_eq!(registry.loading_count(), 2);

        registry.complete(first, OperationOutcome::Success).unwrap();
        assert!(registry.is_loading());
        assert_eq!(registry.loading_count(), 1);

        registry
            .complete(second, OperationOutcome::Failure(ActionError::msg("x")))
            .unwrap();
        assert!(!registry.is_loading());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut registry = OperationRegistry::new();
        let id = registry.begin();
        registry.complete(id, OperationOutcome::Success).unwrap();

        let err = registry
            .complete(id, OperationOutcome::Failure(ActionError::msg("late")))
            .unwrap_err();
        assert!(matches!(err, TrackerError::AlreadyCompleted(e) if e == id));

        // The first outcome sticks
        assert!(registry.get(&id).unwrap().outcome().unwrap().is_success());
    }

    #[test]
    fn test_complete_unknown_id() {
        let mut registry = OperationRegistry::new();
        let err = registry
            .complete(OperationId::new(), OperationOutcome::Success)
            .unwrap_err();
        assert!(matches!(err, TrackerError::UnknownOperation(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_completed_entries_are_retained_until_pruned() {
        let mut registry = OperationRegistry::new();
        let done = registry.begin();
        let running = registry.begin();
        registry.complete(done, OperationOutcome::Success).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.prune_completed(), 1);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&done).is_none());
        assert!(registry.get(&running).is_some());

        // Nothing left to prune
        assert_eq!(registry.prune_completed(), 0);
    }
}
