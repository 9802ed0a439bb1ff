// Confusion sets and the word -> set registry

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

// ---------------------------------------------------------------------------
// ConfusionSet
// ---------------------------------------------------------------------------

/// A group of words that are easily mistaken for one another, such as
/// "there", "their" and "they're".
///
/// Members keep the order they were given in; exact duplicates are dropped.
/// The order is the order in which alternatives are tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionSet {
    words: Vec<String>,
}

impl ConfusionSet {
    /// Create a set from its members.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for word in words {
            let word = word.into();
            if !unique.contains(&word) {
                unique.push(word);
            }
        }
        Self { words: unique }
    }

    /// Members in iteration order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the members.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Whether `word` is a member (exact comparison).
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for ConfusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.words.join(", "))
    }
}

// ---------------------------------------------------------------------------
// ConfusionRegistry
// ---------------------------------------------------------------------------

/// Maps each confusable word to the set it belongs to.
///
/// Keys are exact, case-sensitive token texts. All members of a set share
/// one `Arc<ConfusionSet>`. The registry is immutable once built and can be
/// read from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ConfusionRegistry {
    word_to_set: HashMap<String, Arc<ConfusionSet>>,
}

impl ConfusionRegistry {
    /// An empty registry; nothing is confusable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry in which every member of every set maps to its set.
    ///
    /// A word listed in several sets maps to the last one.
    pub fn from_sets<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = ConfusionSet>,
    {
        let mut word_to_set = HashMap::new();
        for set in sets {
            let set = Arc::new(set);
            for word in set.words() {
                word_to_set.insert(word.clone(), Arc::clone(&set));
            }
        }
        Self { word_to_set }
    }

    /// A registry containing exactly one set, each of whose members maps to
    /// that set.
    pub fn from_set(set: ConfusionSet) -> Self {
        Self::from_sets([set])
    }

    /// The confusion set for `word`, if it is known to be confusable.
    pub fn lookup(&self, word: &str) -> Option<&ConfusionSet> {
        self.word_to_set.get(word).map(Arc::as_ref)
    }

    /// Like [`lookup`](Self::lookup) but returns the shared handle.
    pub fn lookup_shared(&self, word: &str) -> Option<&Arc<ConfusionSet>> {
        self.word_to_set.get(word)
    }

    /// Number of confusable words.
    pub fn len(&self) -> usize {
        self.word_to_set.len()
    }

    /// Whether no word is confusable.
    pub fn is_empty(&self) -> bool {
        self.word_to_set.is_empty()
    }
}

impl FromIterator<ConfusionSet> for ConfusionRegistry {
    fn from_iter<I: IntoIterator<Item = ConfusionSet>>(iter: I) -> Self {
        Self::from_sets(iter)
    }
}
