//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Interruption filter configuration
    #[serde(default)]
    pub interruption: InterruptionSettings,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let known_levels = ["trace", "debug", "info", "warn", "error"];
        if !known_levels.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "unknown log level '{}' (expected one of {:?})",
                    self.observability.log_level, known_levels
                ),
            });
        }

        self.interruption.warn_on_degenerate_entries();

        Ok(())
    }
}

/// Interruption filter settings
///
/// Empty word lists mean "use the built-in defaults"; the filter crate
/// performs that substitution when converting to its runtime config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterruptionSettings {
    /// Enable the filter. When disabled every transcript interrupts.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Acknowledgement words/phrases to suppress while the agent speaks
    #[serde(default)]
    pub ignore_words: Vec<String>,

    /// Keywords that always trigger an interruption
    #[serde(default)]
    pub interrupt_keywords: Vec<String>,
}

impl InterruptionSettings {
    /// Warn about entries that will never match the normalized transcript.
    ///
    /// Matching happens against lowercased, whitespace-collapsed text, so
    /// uppercase or untrimmed entries are dead weight. They are accepted
    /// anyway; the filter never rejects configuration.
    fn warn_on_degenerate_entries(&self) {
        for entry in self.ignore_words.iter().chain(&self.interrupt_keywords) {
            if entry.trim() != entry || entry.chars().any(|c| c.is_uppercase()) {
                tracing::warn!(
                    entry = %entry,
                    "word list entry is not lowercase/trimmed and will never match"
                );
            }
        }
    }
}

fn default_true() -> bool {
    true
}

impl Default for InterruptionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ignore_words: Vec::new(),
            interrupt_keywords: Vec::new(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (VOICE_INTERRUPT prefix)
/// 2. config/{env} (if env specified)
/// 3. config/default
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(
            File::with_name(&format!("config/{}", env_name)).required(false),
        );
    }

    builder = builder.add_source(
        Environment::with_prefix("VOICE_INTERRUPT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
