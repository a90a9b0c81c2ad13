//! Error types for async buttons.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

// =============================================================================
// Presentable Errors
// =============================================================================

/// An error that knows how to describe itself to the user.
///
/// Every accessor is optional. An error with no description falls back to a
/// generic alert title; an error with none of the secondary fields shows the
/// title alone.
pub trait PresentableError: fmt::Debug + Send + Sync {
    /// Human-readable description, used as the alert title.
    fn description(&self) -> Option<String>;

    /// Why the operation failed.
    fn failure_reason(&self) -> Option<String> {
        None
    }

    /// What the user could do about it.
    fn recovery_suggestion(&self) -> Option<String> {
        None
    }

    /// Pointer into help material.
    fn help_anchor(&self) -> Option<String> {
        None
    }
}

/// Adapter for errors that only have a `Display` representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainError {
    description: String,
}

impl PlainError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl PresentableError for PlainError {
    fn description(&self) -> Option<String> {
        Some(self.description.clone())
    }
}

// =============================================================================
// Action Error
// =============================================================================

/// The failure value of a wrapped action.
///
/// Cheap to clone so operation snapshots can carry it. This type does not
/// implement `std::error::Error`, which lets any standard error convert into
/// it with `?`.
#[derive(Clone)]
pub struct ActionError {
    inner: Arc<dyn PresentableError>,
}

impl ActionError {
    /// Wrap an error that already exposes presentation details.
    pub fn presentable(error: impl PresentableError + 'static) -> Self {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Create an error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::presentable(PlainError::new(message))
    }

    /// Access the underlying presentable error.
    pub fn as_presentable(&self) -> &dyn PresentableError {
        self.inner.as_ref()
    }
}

impl<E> From<E> for ActionError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::msg(error.to_string())
    }
}

impl fmt::Debug for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.description() {
            Some(description) => f.write_str(&description),
            None => write!(f, "{:?}", self.inner),
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Option name that is neither a flag nor a preset.
    #[error("Unknown button option: {0}")]
    UnknownOption(String),
}
