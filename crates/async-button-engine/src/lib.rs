//! Operation engine for async buttons.
//!
//! This crate drives the lifecycle behind an async button:
//! - `OperationRegistry` - per-press operation bookkeeping
//! - `PolicyEvaluator` - start admission and derived control state
//! - `FeedbackSequencer` - ordered haptic/tint/alert intents after completion
//! - `FeedbackDevice` - seam for platform haptics
//! - `OperationTracker` - observable state tying the above together
//! - `AsyncButton` - an action bound to a tracker
//!
//! ## Press Flow
//!
//! ```text
//! press()
//!    │
//!    ▼
//! control disabled? ──yes──▶ dropped
//!    │ no
//!    ▼
//! parallel allowed? ──no───▶ dropped
//!    │ yes
//!    ▼
//! insert Loading, broadcast, prime haptics
//!    │
//!    ▼
//! spawn work ──▶ await ──▶ Completed(outcome), broadcast
//!                              │
//!                              ▼
//!                   haptic ─▶ tint ─▶ alert
//! ```

pub mod button;
pub mod device;
pub mod error;
pub mod handle;
pub mod policy;
pub mod registry;
pub mod sequencer;
pub mod tracker;

// Re-export commonly used types
pub use button::{Action, AsyncButton};
pub use device::{FeedbackDevice, LoggingFeedbackDevice, SilentFeedbackDevice};
pub use error::{TrackerError, TrackerResult};
pub use handle::OperationHandle;
pub use policy::{ControlState, PolicyEvaluator};
pub use registry::OperationRegistry;
pub use sequencer::FeedbackSequencer;
pub use tracker::{ButtonState, OperationTracker, TrackerSettings};

// Re-export core types for convenience
pub use async_button_core::{
    ActionError, ButtonConfig, ButtonOptions, Color, ErrorPresentation, FeedbackEvent,
    FeedbackTiming, Haptic, OperationId, OperationOutcome, OperationState, Platform,
    PresentableError,
};
