//! Context-aware interruption filtering for voice agents
//!
//! Distinguishes passive acknowledgements (e.g. "yeah", "ok", "hmm") from
//! active interruptions (e.g. "stop", "wait", "no") based on whether the
//! agent is currently speaking:
//! - Configurable ignore list for filler/acknowledgement words
//! - Configurable interrupt keywords that always trigger interruption
//! - State-based filtering (only filters while the agent is speaking)
//! - Mixed input detection ("yeah wait" interrupts due to "wait")

pub mod config;
pub mod filter;
pub mod words;

pub use config::InterruptionFilterConfig;
pub use filter::InterruptionFilter;
pub use words::{DEFAULT_IGNORE_WORDS, DEFAULT_INTERRUPT_KEYWORDS};
