//! The interruption classifier
//!
//! Decision logic, in order (first matching rule wins):
//! - Filter disabled -> always interrupt
//! - Agent not speaking -> always interrupt (all input is valid)
//! - Empty transcript -> never interrupt
//! - Transcript contains an interrupt keyword -> interrupt
//! - Transcript is only ignore words -> suppress
//! - Anything else -> interrupt

use std::sync::Arc;

use parking_lot::RwLock;
use regex::{Regex, RegexSet};
use tracing::{debug, trace, warn};
use voice_interrupt_core::TranscriptResult;

use crate::config::InterruptionFilterConfig;

/// Matching rules compiled from one configuration snapshot.
///
/// Compiled once per config install so the per-call path only runs
/// prebuilt matchers. Immutable after construction; the filter publishes a
/// new instance on every config replacement.
struct CompiledRules {
    config: InterruptionFilterConfig,
    /// Multi-word interrupt keywords, matched as literal substrings
    keyword_phrases: Vec<String>,
    /// Single-word interrupt keywords, matched at word boundaries
    keyword_words: Option<RegexSet>,
    /// Multi-word ignore entries, longest first, matched at word boundaries
    ignore_phrases: Vec<Regex>,
}

impl CompiledRules {
    fn compile(config: InterruptionFilterConfig) -> Self {
        let mut keyword_phrases = Vec::new();
        let mut word_patterns = Vec::new();
        for keyword in &config.interrupt_keywords {
            if keyword.is_empty() {
                // An empty entry can never match
                continue;
            }
            if keyword.contains(' ') {
                keyword_phrases.push(keyword.clone());
            } else {
                word_patterns.push(format!(r"\b{}\b", regex::escape(keyword)));
            }
        }

        let keyword_words = if word_patterns.is_empty() {
            None
        } else {
            match RegexSet::new(&word_patterns) {
                Ok(set) => Some(set),
                Err(e) => {
                    warn!(error = %e, "failed to compile interrupt keyword patterns");
                    None
                }
            }
        };

        // Longest phrases first so a short entry never shadows a longer one
        // that contains it.
        let mut phrases: Vec<&String> = config
            .ignore_words
            .iter()
            .filter(|w| w.contains(' '))
            .collect();
        phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let ignore_phrases = phrases
            .into_iter()
            .filter_map(|phrase| {
                let pattern = format!(r"\b{}\b", regex::escape(phrase));
                match Regex::new(&pattern) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!(phrase = %phrase, error = %e, "failed to compile ignore phrase");
                        None
                    }
                }
            })
            .collect();

        Self {
            config,
            keyword_phrases,
            keyword_words,
            ignore_phrases,
        }
    }

    /// Check if the normalized text contains any interrupt keyword.
    ///
    /// Phrases match as plain substrings; single words only at word
    /// boundaries, so "no" matches standalone "no" but not "know".
    fn contains_interrupt_keyword(&self, normalized: &str) -> bool {
        if self
            .keyword_phrases
            .iter()
            .any(|phrase| normalized.contains(phrase.as_str()))
        {
            return true;
        }
        self.keyword_words
            .as_ref()
            .is_some_and(|set| set.is_match(normalized))
    }

    /// Check if the normalized text consists only of ignore-list entries.
    ///
    /// Handles single words ("yeah"), multiple words ("yeah ok hmm"),
    /// phrases ("i see"), and mixed input ("yeah what" -> false).
    fn is_only_ignore_words(&self, normalized: &str) -> bool {
        let mut remaining = normalized.to_string();

        // Remove phrase entries first, replacing with a space so removal
        // never fuses adjacent tokens.
        for phrase in &self.ignore_phrases {
            remaining = phrase.replace_all(&remaining, " ").into_owned();
        }

        let mut tokens = remaining.split_whitespace().peekable();
        if tokens.peek().is_none() {
            // All text was consumed by phrases
            return true;
        }

        tokens.all(|token| {
            let cleaned = strip_edge_punctuation(token);
            cleaned.is_empty() || self.config.ignore_words.contains(cleaned)
        })
    }
}

/// Strip punctuation from a token's edges.
///
/// A punctuation character is anything that is not alphanumeric, an
/// underscore, whitespace, or a hyphen. Interior characters are kept, so
/// hyphenated tokens like "uh-huh" survive intact.
fn strip_edge_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| {
        !(c.is_alphanumeric() || c == '_' || c == '-' || c.is_whitespace())
    })
}

/// Normalize a transcript: lowercase, collapse whitespace runs, trim.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filters user speech to distinguish acknowledgements from interruptions.
///
/// The filter is context-aware: it only filters while the agent is actively
/// speaking. When the agent is silent, all user input is treated as valid.
///
/// Safe to share across threads; [`should_interrupt`] takes a consistent
/// configuration snapshot at call entry, and [`update_config`] publishes a
/// whole new snapshot atomically.
///
/// [`should_interrupt`]: InterruptionFilter::should_interrupt
/// [`update_config`]: InterruptionFilter::update_config
pub struct InterruptionFilter {
    rules: RwLock<Arc<CompiledRules>>,
}

impl InterruptionFilter {
    /// Create a filter with the default configuration
    pub fn new() -> Self {
        Self::with_config(InterruptionFilterConfig::default())
    }

    /// Create a filter with an explicit configuration
    pub fn with_config(config: InterruptionFilterConfig) -> Self {
        Self {
            rules: RwLock::new(Arc::new(CompiledRules::compile(config))),
        }
    }

    /// Get the current filter configuration
    pub fn config(&self) -> InterruptionFilterConfig {
        self.rules.read().config.clone()
    }

    /// Replace the filter configuration.
    ///
    /// Total replacement, no merge with the previous value. Visible to
    /// subsequent [`should_interrupt`] calls immediately; in-flight calls
    /// keep the snapshot they took at entry.
    ///
    /// [`should_interrupt`]: InterruptionFilter::should_interrupt
    pub fn update_config(&self, config: InterruptionFilterConfig) {
        let rules = Arc::new(CompiledRules::compile(config));
        *self.rules.write() = rules;
        debug!("interruption filter configuration replaced");
    }

    /// Determine whether user speech should interrupt the agent.
    ///
    /// Returns `true` if the agent should stop talking. Total over all
    /// string inputs; never panics.
    pub fn should_interrupt(&self, transcript: &str, agent_is_speaking: bool) -> bool {
        let rules = self.rules.read().clone();

        if !rules.config.enabled {
            return true;
        }

        if !agent_is_speaking {
            // Agent is silent, treat all input as valid
            return true;
        }

        if transcript.trim().is_empty() {
            return false;
        }

        let normalized = normalize(transcript);

        if rules.contains_interrupt_keyword(&normalized) {
            trace!(transcript = %normalized, "interrupt keyword matched");
            return true;
        }

        if rules.is_only_ignore_words(&normalized) {
            trace!(transcript = %normalized, "acknowledgement only, suppressing");
            return false;
        }

        // Contains substantive content beyond filler
        true
    }

    /// Transcript-level entry point for pipeline callers.
    pub fn should_interrupt_transcript(
        &self,
        result: &TranscriptResult,
        agent_is_speaking: bool,
    ) -> bool {
        self.should_interrupt(&result.text, agent_is_speaking)
    }
}

impl Default for InterruptionFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello   WORLD  "), "hello world");
        assert_eq!(normalize("Yeah\tOK\nhmm"), "yeah ok hmm");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_strip_edge_punctuation() {
        assert_eq!(strip_edge_punctuation("yeah!"), "yeah");
        assert_eq!(strip_edge_punctuation("...ok..."), "ok");
        assert_eq!(strip_edge_punctuation("uh-huh"), "uh-huh");
        assert_eq!(strip_edge_punctuation("don't"), "don't");
        assert_eq!(strip_edge_punctuation("!!!"), "");
    }

    #[test]
    fn test_word_boundary_keyword_matching() {
        // "know" must not trigger the single-word keyword "no"
        let config = InterruptionFilterConfig::default().with_ignore_words(["know"]);
        let filter = InterruptionFilter::with_config(config);
        assert!(!filter.should_interrupt("know", true));

        // Standalone "no" does trigger
        assert!(filter.should_interrupt("no", true));

        // "notice" must not trigger "not"
        let config = InterruptionFilterConfig::default().with_ignore_words(["notice"]);
        let filter = InterruptionFilter::with_config(config);
        assert!(!filter.should_interrupt("notice", true));
    }

    #[test]
    fn test_phrase_keyword_substring_matching() {
        let filter = InterruptionFilter::new();
        assert!(filter.should_interrupt("hold on", true));
        assert!(filter.should_interrupt("please hold on a moment", true));
        assert!(filter.should_interrupt("so what about the price", true));
    }

    #[test]
    fn test_ignore_phrase_requires_boundaries() {
        let filter = InterruptionFilter::new();
        // "i see" is an ignore phrase, "i seen" is not
        assert!(!filter.should_interrupt("i see", true));
        assert!(filter.should_interrupt("i seen", true));
    }

    #[test]
    fn test_punctuated_acknowledgements() {
        let filter = InterruptionFilter::new();
        assert!(!filter.should_interrupt("yeah!", true));
        assert!(!filter.should_interrupt("ok.", true));
        assert!(!filter.should_interrupt("uh-huh", true));
        assert!(!filter.should_interrupt("of course!", true));
    }

    #[test]
    fn test_punctuation_only_transcript() {
        let filter = InterruptionFilter::new();
        // Tokens that clean to empty are treated as ignorable
        assert!(!filter.should_interrupt("yeah !!!", true));
    }

    #[test]
    fn test_empty_config_entries_never_match() {
        let config = InterruptionFilterConfig::default()
            .with_interrupt_keywords(["", "stop"])
            .with_ignore_words(["", "yeah"]);
        let filter = InterruptionFilter::with_config(config);
        assert!(filter.should_interrupt("stop", true));
        assert!(!filter.should_interrupt("yeah", true));
        assert!(filter.should_interrupt("something else", true));
    }

    #[test]
    fn test_longest_phrase_removed_first() {
        // "wait a" would leave "second" behind if tried before
        // "wait a second"; longest-first ordering consumes the whole phrase.
        let config = InterruptionFilterConfig::default()
            .with_interrupt_keywords(Vec::<String>::new())
            .with_ignore_words(["wait a", "wait a second"]);
        let filter = InterruptionFilter::with_config(config);
        assert!(!filter.should_interrupt("wait a second", true));
    }

    #[test]
    fn test_config_snapshot_isolated_from_update() {
        let filter = InterruptionFilter::new();
        let before = filter.config();
        filter.update_config(InterruptionFilterConfig::default().with_enabled(false));
        // The earlier snapshot is unaffected by the replacement
        assert!(before.enabled);
        assert!(!filter.config().enabled);
    }

    #[test]
    fn test_transcript_result_entry_point() {
        let filter = InterruptionFilter::new();
        let ack = TranscriptResult::final_result("okay".to_string(), 0.9);
        assert!(!filter.should_interrupt_transcript(&ack, true));

        let barge = TranscriptResult::final_result("no stop".to_string(), 0.9);
        assert!(filter.should_interrupt_transcript(&barge, true));
    }
}
