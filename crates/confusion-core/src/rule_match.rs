// Correction records emitted by rules

/// A correction proposed by a rule for a span of the checked text.
///
/// Offsets are character offsets; the span is `start_pos..end_pos`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RuleMatch {
    /// Identifier of the rule that produced the match.
    pub rule_id: String,

    /// Start position of the flagged span (character offset).
    pub start_pos: usize,

    /// End position of the flagged span, exclusive.
    pub end_pos: usize,

    /// Human-readable explanation.
    pub message: String,

    /// The replacement text the rule suggests.
    pub suggested_replacement: String,
}

impl RuleMatch {
    /// Create a new match.
    pub fn new(
        rule_id: impl Into<String>,
        start_pos: usize,
        end_pos: usize,
        message: impl Into<String>,
        suggested_replacement: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            start_pos,
            end_pos,
            message: message.into(),
            suggested_replacement: suggested_replacement.into(),
        }
    }

    /// Length of the flagged span in characters.
    pub fn len(&self) -> usize {
        self.end_pos.saturating_sub(self.start_pos)
    }

    /// Whether the flagged span is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
