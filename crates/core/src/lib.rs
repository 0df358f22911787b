//! Shared types for the voice interruption filter
//!
//! This crate provides the transcript types that the surrounding speech
//! pipeline hands to the interruption filter.

pub mod transcript;

pub use transcript::TranscriptResult;
