// Decision engine: picks at most one better alternative from a confusion set
//
// The text's own word is scored first (the baseline). Alternatives are then
// tried in set order; one is accepted when it beats the current best score
// by `min_score_diff` and reaches `min_alternative_score` on its own. An
// accepted alternative becomes the new best, so later alternatives must
// beat it rather than the baseline.

use confusion_ngram::{FrequencyLookup, LookupError};
use tracing::debug;

use crate::context::NeighborContext;
use crate::registry::ConfusionSet;
use crate::scorer::score;

/// How much an alternative must beat the best score so far. Default: 6.
pub const MIN_SCORE_DIFF: f64 = 6.0;

/// Lowest score an alternative may have to be suggested at all. Default: 14.
/// Keeps exotic suggestions backed by a handful of observations out.
pub const MIN_ALTERNATIVE_SCORE: f64 = 14.0;

/// Bonus added to the score of the text's own word. Default: 0.
pub const TEXT_SCORE_ADVANTAGE: f64 = 0.0;

/// Thresholds of the decision engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfusionOptions {
    /// Margin over the best score so far an alternative needs.
    pub min_score_diff: f64,
    /// Absolute score an alternative needs.
    pub min_alternative_score: f64,
    /// Added to the baseline to bias toward keeping the text as written.
    pub text_score_advantage: f64,
}

impl Default for ConfusionOptions {
    fn default() -> Self {
        Self {
            min_score_diff: MIN_SCORE_DIFF,
            min_alternative_score: MIN_ALTERNATIVE_SCORE,
            text_score_advantage: TEXT_SCORE_ADVANTAGE,
        }
    }
}

// ---------------------------------------------------------------------------
// AlternativeSelector
// ---------------------------------------------------------------------------

/// Running state of the best-alternative search.
#[derive(Debug, Clone)]
pub struct AlternativeSelector<'w> {
    best_score: f64,
    best: Option<&'w str>,
    min_score_diff: f64,
    min_alternative_score: f64,
}

impl<'w> AlternativeSelector<'w> {
    /// Start from `baseline`, the (already advantaged) score of the text's
    /// own word.
    pub fn new(baseline: f64, options: &ConfusionOptions) -> Self {
        Self {
            best_score: baseline,
            best: None,
            min_score_diff: options.min_score_diff,
            min_alternative_score: options.min_alternative_score,
        }
    }

    /// Consider `alternative` with `alt_score`. Returns whether it became
    /// the new best.
    pub fn offer(&mut self, alternative: &'w str, alt_score: f64) -> bool {
        if alt_score >= self.best_score + self.min_score_diff
            && alt_score >= self.min_alternative_score
        {
            self.best = Some(alternative);
            self.best_score = alt_score;
            true
        } else {
            false
        }
    }

    /// Score the next alternative has to beat (before the margin).
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// The accepted alternative, if any.
    pub fn into_best(self) -> Option<&'w str> {
        self.best
    }
}

// ---------------------------------------------------------------------------
// DecisionEngine
// ---------------------------------------------------------------------------

/// Scores a token and its alternatives and applies the selection policy.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    options: ConfusionOptions,
}

impl DecisionEngine {
    pub fn new(options: ConfusionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConfusionOptions {
        &self.options
    }

    /// The member of `set` that fits `context` clearly better than `word`,
    /// or `None`.
    ///
    /// A comma among the neighbors suppresses the decision without issuing
    /// any lookup. Members equal to `word` ignoring case are not considered.
    pub fn better_alternative<'s, L: FrequencyLookup + ?Sized>(
        &self,
        lookup: &L,
        word: &str,
        set: &'s ConfusionSet,
        context: &NeighborContext<'_>,
    ) -> Result<Option<&'s str>, LookupError> {
        if context.contains_comma() {
            debug!(word, "comma in context, skipping");
            return Ok(None);
        }

        let baseline = score(lookup, word, context)? + self.options.text_score_advantage;
        let mut selector = AlternativeSelector::new(baseline, &self.options);

        for alternative in set.iter() {
            if eq_ignore_case(alternative, word) {
                continue;
            }
            let alt_score = score(lookup, alternative, context)?;
            selector.offer(alternative, alt_score);
        }

        Ok(selector.into_best())
    }
}

/// Character-wise case-insensitive equality: each pair of characters must be
/// equal, equal after upper-casing, or equal after lower-casing.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y
                || x.to_uppercase().eq(y.to_uppercase())
                || x.to_lowercase().eq(y.to_lowercase())
        })
}
