//! An async action bound to an operation tracker.
//!
//! `AsyncButton` is what a host toolkit wires to its press event. It is
//! toolkit-independent: the host renders from `state()` / `subscribe()` and
//! calls `press()` and `dismiss_alert()`.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::sync::Arc;

use async_button_core::{ActionError, ButtonConfig, ConfigError, FeedbackEvent};
use tokio::sync::{broadcast, watch};

use crate::device::FeedbackDevice;
use crate::handle::OperationHandle;
use crate::tracker::{ButtonState, OperationTracker, TrackerSettings};

/// The wrapped action. Called once per accepted press.
pub type Action = Arc<dyn Fn() -> BoxFuture<'static, Result<(), ActionError>> + Send + Sync>;

/// A pressable control that runs an async action.
pub struct AsyncButton {
    action: Action,
    tracker: Arc<OperationTracker>,
}

impl AsyncButton {
    /// Create a button for `action`.
    pub fn new<F, Fut>(action: F, settings: TrackerSettings, device: Arc<dyn FeedbackDevice>) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        Self {
            action: Arc::new(move || action().boxed()),
            tracker: Arc::new(OperationTracker::new(settings, device)),
        }
    }

    /// Create a button configured from a loaded config file.
    pub fn from_config<F, Fut>(
        action: F,
        config: &ButtonConfig,
        device: Arc<dyn FeedbackDevice>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        let settings = TrackerSettings::from_config(config)?;
        Ok(Self::new(action, settings, device))
    }

    /// Get a reference to the tracker.
    pub fn tracker(&self) -> &Arc<OperationTracker> {
        &self.tracker
    }

    /// Handle a press.
    ///
    /// A disabled control swallows the press. Otherwise the tracker decides
    /// whether the action runs; `None` means nothing was started.
    pub fn press(&self) -> Option<OperationHandle> {
        if self.tracker.state().control_disabled {
            tracing::debug!("Press ignored: control is disabled");
            return None;
        }

        let action = Arc::clone(&self.action);
        self.tracker.start(move || action())
    }

    /// Acknowledge the error alert.
    pub fn dismiss_alert(&self) -> bool {
        self.tracker.dismiss_alert()
    }

    /// Loading flag handed to the host's label builder.
    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }

    pub fn state(&self) -> ButtonState {
        self.tracker.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ButtonState> {
        self.tracker.subscribe()
    }

    pub fn subscribe_feedback(&self) -> broadcast::Receiver<FeedbackEvent> {
        self.tracker.subscribe_feedback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::SilentFeedbackDevice;
    use async_button_core::{ButtonOptions, Color, Platform};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Button whose action waits for `release` and counts invocations.
    fn gated_button(options: ButtonOptions) -> (AsyncButton, Arc<Notify>, Arc<AtomicUsize>) {
        let release = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let action_release = Arc::clone(&release);
        let action_calls = Arc::clone(&calls);
        let button = AsyncButton::new(
            move || {
                let release = Arc::clone(&action_release);
                action_calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    release.notified().await;
                    Ok(())
                }
            },
            TrackerSettings::new(options).with_platform(Platform::Desktop),
            Arc::new(SilentFeedbackDevice),
        );

        (button, release, calls)
    }

    #[tokio::test]
    async fn test_rapid_presses_with_automatic_preset() {
        let (button, release, calls) = gated_button(ButtonOptions::AUTOMATIC);
        let rx = button.subscribe();

        let first = button.press().unwrap();
        assert!(button.press().is_none());
        assert_eq!(button.state().operation_count, 1);
        assert!(rx.borrow().is_loading);

        tokio::task::yield_now().await;
        assert!(button.is_loading());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        release.notify_one();
        first.wait().await.unwrap();
        assert!(!button.is_loading());
        assert!(!rx.borrow().is_loading);
        assert_eq!(button.state().operation_count, 1);
    }

    #[tokio::test]
    async fn test_disabled_control_swallows_presses() {
        let (button, release, calls) = gated_button(ButtonOptions::DISABLE_CONTROL_ON_LOADING);

        let first = button.press().unwrap();
        assert!(button.state().control_disabled);
        assert!(button.press().is_none());

        release.notify_one();
        first.wait().await.unwrap();
        assert!(!button.state().control_disabled);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_parallel_presses_when_allowed() {
        let (button, release, calls) = gated_button(ButtonOptions::SHOW_PROGRESS_ON_LOADING);

        let first = button.press().unwrap();
        let second = button.press().unwrap();
        assert_eq!(button.state().operation_count, 2);
        assert!(button.state().show_progress);

        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        release.notify_waiters();
        first.wait().await.unwrap();
        second.wait().await.unwrap();
        assert!(!button.state().show_progress);
    }

    #[tokio::test]
    async fn test_failing_action_alert_and_dismiss() {
        let button = AsyncButton::new(
            || async { Err(ActionError::msg("x")) },
            TrackerSettings::new(ButtonOptions::AUTOMATIC),
            Arc::new(SilentFeedbackDevice),
        );

        button.press().unwrap().wait().await.unwrap();
        let state = button.state();
        assert!(state.alert_visible);
        assert_eq!(state.alert.unwrap().title, "x");

        assert!(button.dismiss_alert());
        assert!(!button.state().alert_visible);
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = ButtonConfig::from_toml(
            r#"
            options = ["enable_tint_feedback"]
            platform = "desktop"
            "#,
        )
        .unwrap();

        let button = AsyncButton::from_config(
            || async { Ok(()) },
            &config,
            Arc::new(SilentFeedbackDevice),
        )
        .unwrap();
        assert_eq!(
            button.tracker().options(),
            ButtonOptions::ENABLE_TINT_FEEDBACK
        );

        button.press().unwrap().wait().await.unwrap();
        assert_eq!(button.state().tint, Some(Color::Green));
    }

    #[test]
    fn test_from_config_rejects_unknown_options() {
        let mut config = ButtonConfig::default();
        config.options.push("sparkles".to_string());

        let result = AsyncButton::from_config(
            || async { Ok(()) },
            &config,
            Arc::new(SilentFeedbackDevice),
        );
        assert!(matches!(result, Err(ConfigError::UnknownOption(_))));
    }
}
