//! Statistical confusion-set rule.
//!
//! Flags words from a known confusion set (e.g. "there" / "their" /
//! "they're") when corpus trigram counts say another member of the set fits
//! the surrounding words clearly better.
//!
//! # Architecture
//!
//! - [`registry`] -- Confusion sets and the word -> set registry
//! - [`loader`] -- Reading the registry resources through the quality gate
//! - [`context`] -- Neighbor extraction at sentence boundaries
//! - [`scorer`] -- Log-count trigram scoring
//! - [`engine`] -- Best-alternative selection with the dual threshold
//! - [`rule`] -- The sentence rule that turns decisions into matches

pub mod context;
pub mod engine;
pub mod loader;
pub mod registry;
pub mod rule;
pub mod scorer;

use confusion_core::rule_match::RuleMatch;
use confusion_core::token::Token;
use confusion_ngram::LookupError;

use crate::rule::RuleDescriptor;

/// Error type for checking a sentence.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The frequency lookup failed; the sentence was not fully checked.
    #[error("frequency lookup failed for {word:?} at offset {pos}: {source}")]
    Lookup {
        word: String,
        pos: usize,
        #[source]
        source: LookupError,
    },
}

/// A rule the host engine runs on each sentence.
pub trait SentenceRule {
    /// Identity and presentation of the rule.
    fn descriptor(&self) -> &RuleDescriptor;

    /// Check one sentence. `tokens` are the sentence's tokens without
    /// whitespace, in order. Matches are returned in token order.
    fn match_sentence(&self, tokens: &[Token]) -> Result<Vec<RuleMatch>, CheckError>;
}
