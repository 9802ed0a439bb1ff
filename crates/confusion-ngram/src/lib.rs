//! N-gram frequency lookup for the confusion-set checker.
//!
//! The checker only needs one question answered: how often was a sequence of
//! up to three words observed in a reference corpus? This crate defines that
//! seam and ships two implementations of it.
//!
//! # Architecture
//!
//! - [`FrequencyLookup`] -- The lookup trait the checker scores against
//! - [`table`] -- In-memory count table loaded from a tab-separated counts file
//! - [`cache`] -- Memoizing decorator for slow lookup backends

pub mod cache;
pub mod table;

use std::sync::Arc;

/// Largest n-gram order a lookup has to answer.
pub const MAX_NGRAM_ORDER: usize = 3;

/// Error raised by a frequency lookup backend.
///
/// A count of zero is a valid answer and never reported as an error.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("n-gram lookup I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported n-gram order {0}, expected 1 to {max} words", max = MAX_NGRAM_ORDER)]
    UnsupportedOrder(usize),
    #[error("n-gram backend failure: {0}")]
    Backend(String),
}

/// Corpus frequency of short word sequences.
///
/// Implementations must be idempotent and side-effect free from the caller's
/// point of view: asking twice for the same n-gram gives the same count.
pub trait FrequencyLookup {
    /// Number of times `ngram` (1 to [`MAX_NGRAM_ORDER`] words, in order) was
    /// observed. `Ok(0)` means the sequence was never seen.
    fn count(&self, ngram: &[&str]) -> Result<u64, LookupError>;
}

impl<L: FrequencyLookup + ?Sized> FrequencyLookup for &L {
    fn count(&self, ngram: &[&str]) -> Result<u64, LookupError> {
        (**self).count(ngram)
    }
}

impl<L: FrequencyLookup + ?Sized> FrequencyLookup for Box<L> {
    fn count(&self, ngram: &[&str]) -> Result<u64, LookupError> {
        (**self).count(ngram)
    }
}

impl<L: FrequencyLookup + ?Sized> FrequencyLookup for Arc<L> {
    fn count(&self, ngram: &[&str]) -> Result<u64, LookupError> {
        (**self).count(ngram)
    }
}

/// Reject n-grams outside `1..=MAX_NGRAM_ORDER` words.
pub fn check_order(ngram: &[&str]) -> Result<(), LookupError> {
    if ngram.is_empty() || ngram.len() > MAX_NGRAM_ORDER {
        return Err(LookupError::UnsupportedOrder(ngram.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(u64);

    impl FrequencyLookup for Constant {
        fn count(&self, ngram: &[&str]) -> Result<u64, LookupError> {
            check_order(ngram)?;
            Ok(self.0)
        }
    }

    #[test]
    fn order_bounds() {
        assert!(check_order(&["a"]).is_ok());
        assert!(check_order(&["a", "b", "c"]).is_ok());
        assert!(matches!(check_order(&[]), Err(LookupError::UnsupportedOrder(0))));
        assert!(matches!(
            check_order(&["a", "b", "c", "d"]),
            Err(LookupError::UnsupportedOrder(4))
        ));
    }

    #[test]
    fn blanket_impls_forward() {
        let lookup = Constant(7);
        assert_eq!((&lookup).count(&["x"]).unwrap(), 7);

        let boxed: Box<dyn FrequencyLookup> = Box::new(Constant(3));
        assert_eq!(boxed.count(&["x", "y"]).unwrap(), 3);

        let shared: Arc<dyn FrequencyLookup> = Arc::new(Constant(5));
        assert_eq!(shared.count(&["x", "y", "z"]).unwrap(), 5);
    }

    #[test]
    fn error_messages() {
        let err = LookupError::UnsupportedOrder(4);
        assert_eq!(
            err.to_string(),
            "unsupported n-gram order 4, expected 1 to 3 words"
        );
        let err = LookupError::Backend("index closed".to_string());
        assert_eq!(err.to_string(), "n-gram backend failure: index closed");
    }
}
