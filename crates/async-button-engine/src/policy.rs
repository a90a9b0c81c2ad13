//! Policy evaluation: start admission and derived control state.

use async_button_core::{ButtonOptions, Platform};

/// Presentation hints derived from the loading state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    /// The control should reject interaction.
    pub control_disabled: bool,
    /// The control should show an indeterminate progress indicator.
    pub show_progress: bool,
}

/// Pure policy checks over a button's options.
#[derive(Debug, Clone, Copy)]
pub struct PolicyEvaluator {
    options: ButtonOptions,
    platform: Platform,
}

impl PolicyEvaluator {
    pub fn new(options: ButtonOptions, platform: Platform) -> Self {
        Self { options, platform }
    }

    pub fn options(&self) -> ButtonOptions {
        self.options
    }

    /// Whether a new operation may start.
    pub fn admits_start(&self, is_loading: bool) -> bool {
        !(self
            .options
            .contains(ButtonOptions::DISALLOW_PARALLEL_OPERATIONS)
            && is_loading)
    }

    /// Derive the control state for the current loading state.
    pub fn evaluate(&self, is_loading: bool) -> ControlState {
        ControlState {
            control_disabled: self
                .options
                .contains(ButtonOptions::DISABLE_CONTROL_ON_LOADING)
                && is_loading,
            show_progress: self.platform.supports_progress()
                && self
                    .options
                    .contains(ButtonOptions::SHOW_PROGRESS_ON_LOADING)
                && is_loading,
        }
    }
}
