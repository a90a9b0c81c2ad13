//! Button option flags.

use bitflags::bitflags;

bitflags! {
    /// Behaviour toggles for an async button.
    ///
    /// Flags are independent; the engine evaluates them when an operation
    /// starts and again when it completes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ButtonOptions: u32 {
        /// Reject interaction while any operation is loading.
        const DISABLE_CONTROL_ON_LOADING = 1 << 0;
        /// Show an indeterminate progress indicator while loading.
        const SHOW_PROGRESS_ON_LOADING = 1 << 1;
        /// Present an error alert when an operation fails.
        const SHOW_ALERT_ON_ERROR = 1 << 2;
        /// Silently drop presses while an operation is loading.
        const DISALLOW_PARALLEL_OPERATIONS = 1 << 3;
        /// Play a success/error haptic when an operation completes.
        const ENABLE_HAPTIC_FEEDBACK = 1 << 4;
        /// Flash green/red tint when an operation completes.
        const ENABLE_TINT_FEEDBACK = 1 << 5;
        /// Watch only: play the "success" haptic instead of a click.
        const ENABLE_SUCCESS_HAPTIC_FEEDBACK = 1 << 6;

        /// Everything except tint feedback.
        const AUTOMATIC = Self::DISABLE_CONTROL_ON_LOADING.bits()
            | Self::SHOW_PROGRESS_ON_LOADING.bits()
            | Self::SHOW_ALERT_ON_ERROR.bits()
            | Self::DISALLOW_PARALLEL_OPERATIONS.bits()
            | Self::ENABLE_HAPTIC_FEEDBACK.bits();

        /// `AUTOMATIC` plus tint feedback.
        const ALL = Self::AUTOMATIC.bits() | Self::ENABLE_TINT_FEEDBACK.bits();
    }
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self::AUTOMATIC
    }
}

impl ButtonOptions {
    /// Look up a flag or preset by its snake_case config name.
    ///
    /// Accepts the flag names (`show_alert_on_error`, ...) and the presets
    /// `automatic`, `all`, and `none`.
    pub fn from_config_name(name: &str) -> Option<Self> {
        let flags = match name.trim() {
            "none" => Self::empty(),
            "automatic" => Self::AUTOMATIC,
            "all" => Self::ALL,
            "disable_control_on_loading" => Self::DISABLE_CONTROL_ON_LOADING,
            "show_progress_on_loading" => Self::SHOW_PROGRESS_ON_LOADING,
            "show_alert_on_error" => Self::SHOW_ALERT_ON_ERROR,
            "disallow_parallel_operations" => Self::DISALLOW_PARALLEL_OPERATIONS,
            "enable_haptic_feedback" => Self::ENABLE_HAPTIC_FEEDBACK,
            "enable_tint_feedback" => Self::ENABLE_TINT_FEEDBACK,
            "enable_success_haptic_feedback" => Self::ENABLE_SUCCESS_HAPTIC_FEEDBACK,
            _ => return None,
        };
        Some(flags)
    }
}
