//! Feedback intents emitted after an operation completes.
//!
//! These are instructions for the presentation layer. The engine decides
//! *what* should happen and in which order; the host decides how it looks.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::presentation::ErrorPresentation;

/// Tint colors used for completion feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
}

/// Device haptic patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Haptic {
    Success,
    Error,
    /// Neutral tap, used on the watch for successes by default.
    Click,
}

/// Linear animation timing for a presentation change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub duration: Duration,
    pub delay: Duration,
}

impl Animation {
    pub fn linear(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Change the control's tint. `None` reverts to the neutral tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintIntent {
    pub color: Option<Color>,
    pub animation: Animation,
}

/// A single feedback effect, in the order the sequencer emits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    Haptic(Haptic),
    Tint(TintIntent),
    Alert(ErrorPresentation),
}

// =============================================================================
// Timing
// =============================================================================

/// Tint feedback timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTiming {
    /// Fade into the success/failure color.
    pub tint_fade_in_ms: u64,
    /// How long the color holds before reverting.
    pub tint_hold_ms: u64,
    /// Fade back to neutral.
    pub tint_fade_out_ms: u64,
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self {
            tint_fade_in_ms: 100,
            tint_hold_ms: 1500,
            tint_fade_out_ms: 200,
        }
    }
}

impl FeedbackTiming {
    pub fn tint_fade_in(&self) -> Duration {
        Duration::from_millis(self.tint_fade_in_ms)
    }

    pub fn tint_hold(&self) -> Duration {
        Duration::from_millis(self.tint_hold_ms)
    }

    pub fn tint_fade_out(&self) -> Duration {
        Duration::from_millis(self.tint_fade_out_ms)
    }
}
