//! Platform classes that change feedback behaviour.

use serde::{Deserialize, Serialize};

use crate::feedback::Haptic;
use crate::options::ButtonOptions;

/// Device class the button runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Desktop,
    Phone,
    /// Minimal chrome: no progress indicator, distinct haptic set.
    Watch,
}

impl Platform {
    /// Platform class for the compilation target.
    pub fn current() -> Self {
        if cfg!(target_os = "watchos") {
            Platform::Watch
        } else if cfg!(any(target_os = "ios", target_os = "android")) {
            Platform::Phone
        } else {
            Platform::Desktop
        }
    }

    /// Whether this platform can draw a progress indicator inside the control.
    pub fn supports_progress(&self) -> bool {
        !matches!(self, Platform::Watch)
    }

    /// Haptic to play for a completed operation.
    pub fn haptic_for(&self, success: bool, options: ButtonOptions) -> Haptic {
        match (self, success) {
            (_, false) => Haptic::Error,
            (Platform::Watch, true) => {
                if options.contains(ButtonOptions::ENABLE_SUCCESS_HAPTIC_FEEDBACK) {
                    Haptic::Success
                } else {
                    Haptic::Click
                }
            }
            (_, true) => Haptic::Success,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_has_no_progress() {
        assert!(Platform::Desktop.supports_progress());
        assert!(Platform::Phone.supports_progress());
        assert!(!Platform::Watch.supports_progress());
    }

    #[test]
    fn test_phone_haptics() {
        let options = ButtonOptions::AUTOMATIC;
        assert_eq!(Platform::Phone.haptic_for(true, options), Haptic::Success);
        assert_eq!(Platform::Phone.haptic_for(false, options), Haptic::Error);
    }

    #[test]
    fn test_watch_success_haptic_needs_flag() {
        let options = ButtonOptions::AUTOMATIC;
        assert_eq!(Platform::Watch.haptic_for(true, options), Haptic::Click);
        assert_eq!(Platform::Watch.haptic_for(false, options), Haptic::Error);

        let options = options | ButtonOptions::ENABLE_SUCCESS_HAPTIC_FEEDBACK;
        assert_eq!(Platform::Watch.haptic_for(true, options), Haptic::Success);
    }

    #[test]
    #[cfg(not(any(target_os = "ios", target_os = "android", target_os = "watchos")))]
    fn test_current_on_desktop_target() {
        assert_eq!(Platform::current(), Platform::Desktop);
    }
}
