//! Shared types for the statistical confusion-set checker.
//!
//! - [`token`] -- Sentence tokens handed in by the upstream tokenizer
//! - [`rule_match`] -- Positioned correction records emitted by rules
//! - [`enums`] -- Rule categories

pub mod enums;
pub mod rule_match;
pub mod token;
