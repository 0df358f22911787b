//! Runtime configuration for the interruption filter

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use voice_interrupt_config::InterruptionSettings;

use crate::words;

/// Configuration for the interruption filter.
///
/// Any string set is accepted; no validation is performed. Matching happens
/// against lowercased, whitespace-collapsed transcripts, so entries should
/// be lowercase and trimmed to be effective (the defaults are). Entries may
/// be single words or multi-word phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterruptionFilterConfig {
    /// Words/phrases to ignore while the agent is speaking
    #[serde(default = "default_ignore_words")]
    pub ignore_words: HashSet<String>,

    /// Keywords that always trigger an interruption, even when mixed with
    /// ignore words
    #[serde(default = "default_interrupt_keywords")]
    pub interrupt_keywords: HashSet<String>,

    /// Whether the filter is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_ignore_words() -> HashSet<String> {
    words::DEFAULT_IGNORE_SET.clone()
}

fn default_interrupt_keywords() -> HashSet<String> {
    words::DEFAULT_INTERRUPT_SET.clone()
}

fn default_enabled() -> bool {
    true
}

impl Default for InterruptionFilterConfig {
    fn default() -> Self {
        Self {
            ignore_words: default_ignore_words(),
            interrupt_keywords: default_interrupt_keywords(),
            enabled: default_enabled(),
        }
    }
}

impl InterruptionFilterConfig {
    /// Replace the ignore word set
    pub fn with_ignore_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the interrupt keyword set
    pub fn with_interrupt_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interrupt_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the filter
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Build a runtime config from loaded settings.
    ///
    /// Empty word lists in the settings fall back to the built-in defaults.
    pub fn from_settings(settings: &InterruptionSettings) -> Self {
        let mut config = Self::default().with_enabled(settings.enabled);
        if !settings.ignore_words.is_empty() {
            config.ignore_words = settings.ignore_words.iter().cloned().collect();
        }
        if !settings.interrupt_keywords.is_empty() {
            config.interrupt_keywords = settings.interrupt_keywords.iter().cloned().collect();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InterruptionFilterConfig::default();
        assert!(config.enabled);
        assert_eq!(config.ignore_words.len(), 38);
        assert_eq!(config.interrupt_keywords.len(), 39);
        assert!(config.ignore_words.contains("uh-huh"));
        assert!(config.interrupt_keywords.contains("wait a minute"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = InterruptionFilterConfig::default()
            .with_ignore_words(["custom1", "custom2"])
            .with_interrupt_keywords(["override"])
            .with_enabled(false);

        assert_eq!(config.ignore_words.len(), 2);
        assert!(config.ignore_words.contains("custom1"));
        assert_eq!(config.interrupt_keywords.len(), 1);
        assert!(!config.enabled);
    }

    #[test]
    fn test_from_settings_empty_lists_use_defaults() {
        let settings = InterruptionSettings::default();
        let config = InterruptionFilterConfig::from_settings(&settings);
        assert_eq!(config, InterruptionFilterConfig::default());
    }

    #[test]
    fn test_from_settings_overrides() {
        let settings = InterruptionSettings {
            enabled: false,
            ignore_words: vec!["custom".to_string()],
            interrupt_keywords: Vec::new(),
        };
        let config = InterruptionFilterConfig::from_settings(&settings);
        assert!(!config.enabled);
        assert_eq!(config.ignore_words.len(), 1);
        // Keywords untouched by an empty list
        assert_eq!(config.interrupt_keywords.len(), 39);
    }
}
