//! Default word lists for the interruption filter

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Passive acknowledgements ignored while the agent is speaking.
///
/// These indicate the user is listening, not trying to take the turn.
pub const DEFAULT_IGNORE_WORDS: &[&str] = &[
    "yeah",
    "yes",
    "yep",
    "yup",
    "ya",
    "ok",
    "okay",
    "hmm",
    "hm",
    "mhm",
    "uh-huh",
    "uh huh",
    "uhuh",
    "right",
    "aha",
    "ah",
    "oh",
    "i see",
    "sure",
    "got it",
    "gotcha",
    "alright",
    "cool",
    "nice",
    "great",
    "good",
    "fine",
    "true",
    "indeed",
    "absolutely",
    "exactly",
    "certainly",
    "definitely",
    "of course",
    "mm",
    "mmm",
    "mmhmm",
    "mm-hmm",
];

/// Keywords that always trigger an interruption.
///
/// These indicate the user wants the agent to stop, even when mixed with
/// acknowledgement words.
pub const DEFAULT_INTERRUPT_KEYWORDS: &[&str] = &[
    "stop",
    "wait",
    "hold on",
    "hold up",
    "pause",
    "no",
    "nope",
    "actually",
    "but",
    "however",
    "excuse me",
    "sorry",
    "hang on",
    "one moment",
    "one second",
    "just a moment",
    "just a second",
    "let me",
    "i have",
    "i need",
    "i want",
    "can you",
    "could you",
    "would you",
    "what about",
    "what if",
    "how about",
    "listen",
    "hey",
    "hello",
    "hi",
    "question",
    "wait a minute",
    "wait a second",
    "not",
    "never",
    "don't",
    "can't",
    "won't",
];

pub(crate) static DEFAULT_IGNORE_SET: Lazy<HashSet<String>> =
    Lazy::new(|| DEFAULT_IGNORE_WORDS.iter().map(|w| w.to_string()).collect());

pub(crate) static DEFAULT_INTERRUPT_SET: Lazy<HashSet<String>> = Lazy::new(|| {
    DEFAULT_INTERRUPT_KEYWORDS
        .iter()
        .map(|w| w.to_string())
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_sizes() {
        assert_eq!(DEFAULT_IGNORE_WORDS.len(), 38);
        assert_eq!(DEFAULT_INTERRUPT_KEYWORDS.len(), 39);
        // No duplicates
        assert_eq!(DEFAULT_IGNORE_SET.len(), 38);
        assert_eq!(DEFAULT_INTERRUPT_SET.len(), 39);
    }

    #[test]
    fn test_entries_lowercase_and_trimmed() {
        for entry in DEFAULT_IGNORE_WORDS.iter().chain(DEFAULT_INTERRUPT_KEYWORDS) {
            assert!(!entry.is_empty());
            assert_eq!(entry.trim(), *entry);
            assert!(entry.chars().all(|c| !c.is_uppercase()), "{}", entry);
        }
    }
}
