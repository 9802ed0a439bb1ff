// Trigram scoring of a candidate word in its context

use confusion_ngram::{FrequencyLookup, LookupError};
use tracing::trace;

use crate::context::NeighborContext;

/// Count of a trigram whose slots are all present; `0` without a lookup
/// otherwise.
pub fn trigram_count<L: FrequencyLookup + ?Sized>(
    lookup: &L,
    slots: [Option<&str>; 3],
) -> Result<u64, LookupError> {
    match slots {
        [Some(w1), Some(w2), Some(w3)] => lookup.count(&[w1, w2, w3]),
        _ => Ok(0),
    }
}

/// `ln(max(1, count))`: unseen trigrams contribute 0 rather than -inf.
fn log_count(count: u64) -> f64 {
    (count.max(1) as f64).ln()
}

/// Plausibility of `word` between its neighbors.
///
/// Sums the log counts of the three trigrams containing `word`: centered
/// (`prev1 word next1`), left (`prev2 prev1 word`) and right
/// (`word next1 next2`). Higher is more plausible; the result is never
/// negative.
pub fn score<L: FrequencyLookup + ?Sized>(
    lookup: &L,
    word: &str,
    context: &NeighborContext<'_>,
) -> Result<f64, LookupError> {
    let center = trigram_count(lookup, [context.prev1, Some(word), context.next1])?;
    let left = trigram_count(lookup, [context.prev2, context.prev1, Some(word)])?;
    let right = trigram_count(lookup, [Some(word), context.next1, context.next2])?;

    let score = log_count(center) + log_count(left) + log_count(right);
    trace!(word, center, left, right, score, "scored candidate");
    Ok(score)
}
