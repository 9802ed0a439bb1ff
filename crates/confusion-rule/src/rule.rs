// ConfusionRule: runs the decision engine over a sentence and emits matches

use std::path::Path;

use confusion_core::enums::RuleCategory;
use confusion_core::rule_match::RuleMatch;
use confusion_core::token::Token;
use confusion_ngram::{FrequencyLookup, LookupError};
use tracing::debug;

use crate::context::NeighborContext;
use crate::engine::{ConfusionOptions, DecisionEngine};
use crate::loader::{ConfusionSetLoader, LoaderOptions, ResourceError};
use crate::registry::{ConfusionRegistry, ConfusionSet};
use crate::{CheckError, SentenceRule};

/// Default rule identifier.
pub const RULE_ID: &str = "CONFUSION_RULE";

/// Identity and presentation of a confusion rule.
///
/// Language-specific variants differ only in these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub id: String,
    pub description: String,
    pub default_enabled: bool,
    pub category: RuleCategory,
}

impl Default for RuleDescriptor {
    fn default() -> Self {
        Self {
            id: RULE_ID.to_string(),
            description: "Statistically detect wrong use of easily confused words".to_string(),
            default_enabled: true,
            category: RuleCategory::Typos,
        }
    }
}

impl RuleDescriptor {
    /// Descriptor for English homophones.
    pub fn english() -> Self {
        Self {
            description: "Statistically detect wrong use of words that are easily confused \
                          (there/their, to/too, ...)"
                .to_string(),
            ..Self::default()
        }
    }
}

/// Message shown for a suggested replacement.
pub fn suggestion_message(alternative: &str) -> String {
    format!("Statistic suggests that '{alternative}' might be the right word here. Please check.")
}

/// Statistical confusion-set rule over a frequency lookup `L`.
///
/// The registry is fixed at construction. To run against different sets,
/// build a new rule with [`with_registry`](Self::with_registry).
pub struct ConfusionRule<L> {
    descriptor: RuleDescriptor,
    registry: ConfusionRegistry,
    engine: DecisionEngine,
    lookup: L,
}

impl<L: FrequencyLookup> ConfusionRule<L> {
    /// Create a rule with default thresholds and descriptor.
    pub fn new(lookup: L, registry: ConfusionRegistry) -> Self {
        Self {
            descriptor: RuleDescriptor::default(),
            registry,
            engine: DecisionEngine::default(),
            lookup,
        }
    }

    /// Create a rule whose registry is read from resource files.
    pub fn from_resources(
        lookup: L,
        sets_path: &Path,
        info_path: Option<&Path>,
        loader_options: LoaderOptions,
    ) -> Result<Self, ResourceError> {
        let registry = ConfusionSetLoader::new(loader_options).load_files(sets_path, info_path)?;
        Ok(Self::new(lookup, registry))
    }

    /// Replace the thresholds.
    pub fn with_options(mut self, options: ConfusionOptions) -> Self {
        self.engine = DecisionEngine::new(options);
        self
    }

    /// Replace the descriptor.
    pub fn with_descriptor(mut self, descriptor: RuleDescriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    /// Replace the whole registry.
    pub fn with_registry(mut self, registry: ConfusionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the registry with a single set, every member of which maps to
    /// that set.
    pub fn with_confusion_set(self, set: ConfusionSet) -> Self {
        self.with_registry(ConfusionRegistry::from_set(set))
    }

    pub fn registry(&self) -> &ConfusionRegistry {
        &self.registry
    }

    pub fn options(&self) -> &ConfusionOptions {
        self.engine.options()
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Decide for the token at `pos` against `set`.
    pub fn better_alternative<'s>(
        &self,
        tokens: &[Token],
        pos: usize,
        set: &'s ConfusionSet,
    ) -> Result<Option<&'s str>, LookupError> {
        let context = NeighborContext::at(tokens, pos);
        self.engine
            .better_alternative(&self.lookup, &tokens[pos].text, set, &context)
    }

    fn to_match(&self, token: &Token, alternative: &str) -> RuleMatch {
        RuleMatch::new(
            self.descriptor.id.as_str(),
            token.pos,
            token.end_pos(),
            suggestion_message(alternative),
            alternative,
        )
    }
}

impl<L: FrequencyLookup> SentenceRule for ConfusionRule<L> {
    fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    fn match_sentence(&self, tokens: &[Token]) -> Result<Vec<RuleMatch>, CheckError> {
        let mut matches = Vec::new();

        for (pos, token) in tokens.iter().enumerate() {
            let Some(set) = self.registry.lookup(&token.text) else {
                continue;
            };

            let alternative =
                self.better_alternative(tokens, pos, set)
                    .map_err(|source| CheckError::Lookup {
                        word: token.text.clone(),
                        pos: token.pos,
                        source,
                    })?;

            if let Some(alternative) = alternative {
                debug!(
                    word = token.text.as_str(),
                    alternative,
                    pos = token.pos,
                    "suggesting replacement"
                );
                matches.push(self.to_match(token, alternative));
            }
        }

        Ok(matches)
    }
}
