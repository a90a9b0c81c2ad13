//! Core types for async buttons.
//!
//! This crate contains the plain data structures shared by the engine and
//! any host toolkit integration:
//! - Option flags and presets
//! - Operation ids, states, and outcomes
//! - Error capability and alert presentation
//! - Feedback intents (haptic, tint, alert)
//! - Platform and timing
//! - Configuration types

mod config;
mod error;
mod feedback;
mod operation;
mod options;
mod platform;
mod presentation;

pub use config::{config_dir, config_path, ButtonConfig};
pub use error::{ActionError, ConfigError, PlainError, PresentableError};
pub use feedback::{Animation, Color, FeedbackEvent, FeedbackTiming, Haptic, TintIntent};
pub use operation::{Operation, OperationId, OperationOutcome, OperationState};
pub use options::ButtonOptions;
pub use platform::Platform;
pub use presentation::{ErrorPresentation, GENERIC_ERROR_TITLE};
