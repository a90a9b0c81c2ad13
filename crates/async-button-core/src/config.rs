//! Configuration types.
//!
//! Buttons are configured from `config.toml` in the async-button config
//! directory. Every key is optional:
//!
//! ```toml
//! options = ["automatic", "enable_tint_feedback"]
//! platform = "phone"
//!
//! [timing]
//! tint_hold_ms = 2000
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::feedback::FeedbackTiming;
use crate::options::ButtonOptions;
use crate::platform::Platform;

/// Runtime configuration for a button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Flag and preset names, unioned together.
    #[serde(default = "default_option_names")]
    pub options: Vec<String>,

    /// Platform class. Detected from the target when absent.
    #[serde(default)]
    pub platform: Platform,

    /// Tint feedback timing.
    #[serde(default)]
    pub timing: FeedbackTiming,
}

fn default_option_names() -> Vec<String> {
    vec!["automatic".to_string()]
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            options: default_option_names(),
            platform: Platform::default(),
            timing: FeedbackTiming::default(),
        }
    }
}

impl ButtonConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: ButtonConfig = toml::from_str(source)?;
        config.button_options()?;
        Ok(config)
    }

    /// Load from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the option names into flags.
    pub fn button_options(&self) -> Result<ButtonOptions, ConfigError> {
        self.options
            .iter()
            .try_fold(ButtonOptions::empty(), |acc, name| {
                ButtonOptions::from_config_name(name)
                    .map(|flags| acc | flags)
                    .ok_or_else(|| ConfigError::UnknownOption(name.clone()))
            })
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("async-button"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}
