// Shared enums: rule categories

/// Category a rule reports its matches under.
///
/// The host rule engine uses the category to group rules in configuration
/// and output; this crate attaches no behavior to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RuleCategory {
    /// Misspellings and wrongly chosen words.
    #[default]
    Typos,
    /// Grammatical agreement and structure.
    Grammar,
    /// Stylistic advice.
    Style,
    /// Anything else.
    Miscellaneous,
}

impl RuleCategory {
    /// Stable upper-case identifier of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Typos => "TYPOS",
            RuleCategory::Grammar => "GRAMMAR",
            RuleCategory::Style => "STYLE",
            RuleCategory::Miscellaneous => "MISC",
        }
    }
}
