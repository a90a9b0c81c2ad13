//! Alert presentation for failed operations.

use serde::{Deserialize, Serialize};

use crate::error::{ActionError, PresentableError};

/// Alert title used when an error has no description.
pub const GENERIC_ERROR_TITLE: &str = "The operation couldn't be completed.";

/// What the error alert shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPresentation {
    /// Alert title.
    pub title: String,

    /// Optional body. When `None` the alert shows the title only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorPresentation {
    /// Build the presentation for a presentable error.
    ///
    /// The message is the first present of failure reason, recovery
    /// suggestion, and help anchor.
    pub fn build(error: &dyn PresentableError) -> Self {
        let title = error
            .description()
            .unwrap_or_else(|| GENERIC_ERROR_TITLE.to_string());
        let message = error
            .failure_reason()
            .or_else(|| error.recovery_suggestion())
            .or_else(|| error.help_anchor());

        Self { title, message }
    }

    /// Build the presentation for an action failure.
    pub fn from_action_error(error: &ActionError) -> Self {
        Self::build(error.as_presentable())
    }
}
