//! Operation tracker behind an async button.
//!
//! A start either records a `Loading` operation and launches its work, or
//! leaves the tracker untouched. Completion flips the operation to
//! `Completed` first; haptic, tint and alert follow in that order. Each of
//! these changes publishes a new `ButtonState`.

use std::future::Future;
use std::sync::Arc;

use async_button_core::{
    ActionError, ButtonConfig, ButtonOptions, Color, ConfigError, ErrorPresentation,
    FeedbackEvent, FeedbackTiming, Operation, OperationId, OperationOutcome, Platform, TintIntent,
};
use parking_lot::RwLock;
use tokio::sync::{broadcast, watch};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::device::FeedbackDevice;
use crate::handle::OperationHandle;
use crate::policy::PolicyEvaluator;
use crate::registry::OperationRegistry;
use crate::sequencer::FeedbackSequencer;

/// Buffered feedback events per subscriber before lagging.
const FEEDBACK_CHANNEL_CAPACITY: usize = 64;

// =============================================================================
// Settings
// =============================================================================

/// Everything a tracker needs to know besides its feedback device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerSettings {
    pub options: ButtonOptions,
    pub platform: Platform,
    pub timing: FeedbackTiming,
}

impl TrackerSettings {
    /// Settings for the current platform with default timing.
    pub fn new(options: ButtonOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_timing(mut self, timing: FeedbackTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Build settings from a loaded config.
    pub fn from_config(config: &ButtonConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            options: config.button_options()?,
            platform: config.platform,
            timing: config.timing,
        })
    }
}

// =============================================================================
// Button State
// =============================================================================

/// Snapshot of everything the host renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// At least one operation is loading.
    pub is_loading: bool,
    /// The control should reject interaction.
    pub control_disabled: bool,
    /// The control should show a progress indicator.
    pub show_progress: bool,
    /// Current tint, `None` for neutral.
    pub tint: Option<Color>,
    /// The error alert is on screen.
    pub alert_visible: bool,
    /// Content of the most recent error alert.
    pub alert: Option<ErrorPresentation>,
    /// Operations in the registry, including completed ones.
    pub operation_count: usize,
}

/// Mutable state behind the tracker's lock.
#[derive(Debug, Default)]
struct TrackerInner {
    registry: OperationRegistry,
    tint: Option<Color>,
    /// Bumped on every immediate tint change so stale reverts can be skipped.
    tint_generation: u64,
    alert_visible: bool,
    alert: Option<ErrorPresentation>,
}

// =============================================================================
// OperationTracker
// =============================================================================

/// Runs a button's operations and owns the state derived from them.
///
/// Starts need a tokio runtime to launch work on; outside one they are
/// refused. An operation's `Completed` snapshot is always published before
/// any of its feedback events, and a delayed tint revert only applies if no
/// newer tint arrived during the hold.
///
/// ```ignore
/// let tracker = Arc::new(OperationTracker::new(settings, device));
/// let handle = tracker.start(|| async { upload().await.map_err(ActionError::from) });
/// assert!(tracker.state().control_disabled);
///
/// let outcome = handle.unwrap().wait().await?;
/// ```
pub struct OperationTracker {
    policy: PolicyEvaluator,
    sequencer: FeedbackSequencer,
    device: Arc<dyn FeedbackDevice>,
    inner: RwLock<TrackerInner>,
    state_tx: watch::Sender<ButtonState>,
    feedback_tx: broadcast::Sender<FeedbackEvent>,
}

impl OperationTracker {
    /// Create a tracker with no operations.
    pub fn new(settings: TrackerSettings, device: Arc<dyn FeedbackDevice>) -> Self {
        let (state_tx, _) = watch::channel(ButtonState::default());
        let (feedback_tx, _) = broadcast::channel(FEEDBACK_CHANNEL_CAPACITY);
        Self {
            policy: PolicyEvaluator::new(settings.options, settings.platform),
            sequencer: FeedbackSequencer::new(settings.options, settings.platform, settings.timing),
            device,
            inner: RwLock::new(TrackerInner::default()),
            state_tx,
            feedback_tx,
        }
    }

    pub fn options(&self) -> ButtonOptions {
        self.policy.options()
    }

    // =========================================================================
    // Mutation Methods (all broadcast automatically)
    // =========================================================================

    /// Start an operation.
    ///
    /// Returns `None` without calling `work` when parallel operations are
    /// disallowed and another operation is loading, or when called outside a
    /// tokio runtime. Otherwise records a loading operation, spawns `work`,
    /// and returns immediately.
    pub fn start<F, Fut>(self: &Arc<Self>, work: F) -> Option<OperationHandle>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!("Start dropped: {}", e);
                return None;
            }
        };

        let id = {
            let mut inner = self.inner.write();
            if !self.policy.admits_start(inner.registry.is_loading()) {
                tracing::debug!("Start dropped: another operation is loading");
                return None;
            }
            let id = inner.registry.begin();
            tracing::debug!(
                %id,
                "Operation started, {} loading",
                inner.registry.loading_count()
            );
            self.broadcast_locked(&inner);
            id
        };

        if self.sequencer.wants_haptics() {
            self.device.prepare();
        }

        let work = runtime.spawn(async move { work().await });
        let tracker = Arc::clone(self);
        let task = runtime.spawn(async move { tracker.finish(id, work).await });
        Some(OperationHandle::new(id, task))
    }

    /// Acknowledge the error alert.
    ///
    /// Returns `true` if an alert was visible. The alert content is kept.
    pub fn dismiss_alert(&self) -> bool {
        let mut inner = self.inner.write();
        if !inner.alert_visible {
            return false;
        }
        inner.alert_visible = false;
        self.broadcast_locked(&inner);
        true
    }

    /// Remove completed operations from the registry.
    ///
    /// Returns how many were removed. Broadcasts only if something changed.
    pub fn prune_completed(&self) -> usize {
        let mut inner = self.inner.write();
        let removed = inner.registry.prune_completed();
        if removed > 0 {
            tracing::debug!("Pruned {} completed operations", removed);
            self.broadcast_locked(&inner);
        }
        removed
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// Get a snapshot of the current state.
    pub fn state(&self) -> ButtonState {
        let inner = self.inner.read();
        self.snapshot(&inner)
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().registry.is_loading()
    }

    /// Get a copy of one operation.
    pub fn operation(&self, id: OperationId) -> Option<Operation> {
        self.inner.read().registry.get(&id).cloned()
    }

    /// Get a copy of every operation in the registry.
    pub fn operations(&self) -> Vec<Operation> {
        self.inner.read().registry.iter().cloned().collect()
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribe to state changes.
    ///
    /// The receiver sees the current state immediately and all future changes.
    pub fn subscribe(&self) -> watch::Receiver<ButtonState> {
        self.state_tx.subscribe()
    }

    /// Subscribe to feedback events, in emission order.
    pub fn subscribe_feedback(&self) -> broadcast::Receiver<FeedbackEvent> {
        self.feedback_tx.subscribe()
    }

    // =========================================================================
    // Completion & Feedback
    // =========================================================================

    /// Await the work, record the outcome, then run the feedback sequence.
    async fn finish(
        self: Arc<Self>,
        id: OperationId,
        work: JoinHandle<Result<(), ActionError>>,
    ) -> OperationOutcome {
        let outcome = match work.await {
            Ok(result) => OperationOutcome::from(result),
            Err(e) => {
                tracing::warn!(%id, "Operation task failed: {}", e);
                OperationOutcome::Failure(ActionError::msg(format!("Operation task failed: {e}")))
            }
        };

        self.complete(id, &outcome);
        self.dispatch_feedback(&outcome);
        outcome
    }

    fn complete(&self, id: OperationId, outcome: &OperationOutcome) {
        let mut inner = self.inner.write();
        match inner.registry.complete(id, outcome.clone()) {
            Ok(()) => {
                tracing::debug!(
                    %id,
                    success = outcome.is_success(),
                    "Operation completed, {} loading",
                    inner.registry.loading_count()
                );
                self.broadcast_locked(&inner);
            }
            Err(e) => tracing::warn!("Completion dropped: {}", e),
        }
    }

    fn dispatch_feedback(self: &Arc<Self>, outcome: &OperationOutcome) {
        // Generation written by this operation's own tint
        let mut own_tint = None;

        for event in self.sequencer.plan(outcome) {
            // No subscribers is fine
            let _ = self.feedback_tx.send(event.clone());

            match event {
                FeedbackEvent::Haptic(haptic) => self.device.play(haptic),
                FeedbackEvent::Tint(intent) if intent.animation.delay.is_zero() => {
                    own_tint = Some(self.set_tint(intent.color));
                }
                FeedbackEvent::Tint(intent) => {
                    let generation =
                        own_tint.unwrap_or_else(|| self.inner.read().tint_generation);
                    self.schedule_tint(intent, generation);
                }
                FeedbackEvent::Alert(presentation) => self.show_alert(presentation),
            }
        }
    }

    /// Apply a tint now. Returns the generation it was written under.
    fn set_tint(&self, color: Option<Color>) -> u64 {
        let mut inner = self.inner.write();
        inner.tint = color;
        inner.tint_generation += 1;
        self.broadcast_locked(&inner);
        inner.tint_generation
    }

    /// Apply a tint after its delay, unless the tint changed since `generation`.
    fn schedule_tint(self: &Arc<Self>, intent: TintIntent, generation: u64) {
        let tracker = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(intent.animation.delay).await;
            let mut inner = tracker.inner.write();
            if inner.tint_generation == generation {
                inner.tint = intent.color;
                tracker.broadcast_locked(&inner);
            } else {
                tracing::trace!("Skipped stale tint revert");
            }
        });
    }

    fn show_alert(&self, presentation: ErrorPresentation) {
        tracing::debug!(title = %presentation.title, "Showing error alert");
        let mut inner = self.inner.write();
        inner.alert = Some(presentation);
        inner.alert_visible = true;
        self.broadcast_locked(&inner);
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn broadcast_locked(&self, inner: &TrackerInner) {
        self.state_tx.send_replace(self.snapshot(inner));
    }

    fn snapshot(&self, inner: &TrackerInner) -> ButtonState {
        let is_loading = inner.registry.is_loading();
        let control = self.policy.evaluate(is_loading);
        ButtonState {
            is_loading,
            control_disabled: control.control_disabled,
            show_progress: control.show_progress,
            tint: inner.tint,
            alert_visible: inner.alert_visible,
            alert: inner.alert.clone(),
            operation_count: inner.registry.len(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
