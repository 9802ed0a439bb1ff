// Memoizing decorator for frequency lookups
//
// The confusion rule issues up to three lookups per confusion-set member and
// repeats them for every occurrence of a confusable word. Backends that hit
// disk or the network can be wrapped in a `CachedLookup` by the caller; the
// rule itself never caches.

use std::cell::{Cell, RefCell};

use hashbrown::HashMap;

use crate::{FrequencyLookup, LookupError};

/// Caches counts returned by an inner lookup, keyed by the space-joined
/// n-gram.
///
/// Failed lookups are not cached, so a later call retries the backend.
/// Uses interior mutability and is therefore not `Sync`; give each thread
/// its own cache.
pub struct CachedLookup<L> {
    inner: L,
    entries: RefCell<HashMap<String, u64>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<L: FrequencyLookup> CachedLookup<L> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            entries: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    /// Number of lookups forwarded to the inner backend.
    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    /// Number of cached n-grams.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop all cached counts and reset the statistics.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
        self.hits.set(0);
        self.misses.set(0);
    }

    /// Unwrap the inner lookup.
    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: FrequencyLookup> FrequencyLookup for CachedLookup<L> {
    fn count(&self, ngram: &[&str]) -> Result<u64, LookupError> {
        let key = ngram.join(" ");
        if let Some(&count) = self.entries.borrow().get(key.as_str()) {
            self.hits.set(self.hits.get() + 1);
            return Ok(count);
        }

        self.misses.set(self.misses.get() + 1);
        let count = self.inner.count(ngram)?;
        self.entries.borrow_mut().insert(key, count);
        Ok(count)
    }
}
