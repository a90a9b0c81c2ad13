//! Feedback devices.
//!
//! Platform haptic APIs live behind `FeedbackDevice`. The tracker primes the
//! device when an operation starts and plays a haptic when it completes.
//! Hosts inject the implementation for their platform at construction.

use async_button_core::Haptic;

/// Haptic output for a platform.
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackDevice: Send + Sync {
    /// Warm up the haptic engine ahead of an expected `play`.
    fn prepare(&self);

    /// Play a haptic pattern.
    fn play(&self, haptic: Haptic);
}

/// Device for platforms without haptics.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentFeedbackDevice;

impl FeedbackDevice for SilentFeedbackDevice {
    fn prepare(&self) {}

    fn play(&self, _haptic: Haptic) {}
}

/// Device that reports haptics through `tracing` instead of hardware.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingFeedbackDevice;

impl FeedbackDevice for LoggingFeedbackDevice {
    fn prepare(&self) {
        tracing::debug!("Haptic engine primed");
    }

    fn play(&self, haptic: Haptic) {
        tracing::info!(?haptic, "Haptic played");
    }
}
