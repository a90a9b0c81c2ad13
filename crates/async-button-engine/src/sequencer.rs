//! Feedback sequencing.
//!
//! After an operation completes, its feedback runs in a fixed order:
//! haptic, then tint (color followed by a delayed revert), then the error
//! alert. Each step is gated by its own option flag.

use async_button_core::{
    Animation, ButtonOptions, Color, ErrorPresentation, FeedbackEvent, FeedbackTiming,
    OperationOutcome, Platform, TintIntent,
};

/// Plans the feedback intents for a completed operation.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackSequencer {
    options: ButtonOptions,
    platform: Platform,
    timing: FeedbackTiming,
}

impl FeedbackSequencer {
    pub fn new(options: ButtonOptions, platform: Platform, timing: FeedbackTiming) -> Self {
        Self {
            options,
            platform,
            timing,
        }
    }

    /// Whether the feedback device should be primed when an operation starts.
    pub fn wants_haptics(&self) -> bool {
        self.options.contains(ButtonOptions::ENABLE_HAPTIC_FEEDBACK)
    }

    /// Feedback intents for `outcome`, in emission order.
    pub fn plan(&self, outcome: &OperationOutcome) -> Vec<FeedbackEvent> {
        let mut events = Vec::with_capacity(4);

        if self.wants_haptics() {
            events.push(FeedbackEvent::Haptic(
                self.platform.haptic_for(outcome.is_success(), self.options),
            ));
        }

        if self.options.contains(ButtonOptions::ENABLE_TINT_FEEDBACK) {
            let color = if outcome.is_success() {
                Color::Green
            } else {
                Color::Red
            };
            events.push(FeedbackEvent::Tint(TintIntent {
                color: Some(color),
                animation: Animation::linear(self.timing.tint_fade_in()),
            }));
            events.push(FeedbackEvent::Tint(TintIntent {
                color: None,
                animation: Animation::linear(self.timing.tint_fade_out())
                    .delayed(self.timing.tint_hold()),
            }));
        }

        if self.options.contains(ButtonOptions::SHOW_ALERT_ON_ERROR) {
            if let Some(error) = outcome.error() {
                events.push(FeedbackEvent::Alert(ErrorPresentation::from_action_error(
                    error,
                )));
            }
        }

        events
    }
}
