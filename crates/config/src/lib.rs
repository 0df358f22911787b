//! Configuration loading for the voice interruption filter
//!
//! Settings are layered: `config/default` file, then an optional
//! environment-specific file, then `VOICE_INTERRUPT__*` environment
//! variables.

pub mod settings;

pub use settings::{
    load_settings, InterruptionSettings, ObservabilityConfig, Settings,
};

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
