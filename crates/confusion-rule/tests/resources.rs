//! End-to-end checks of the confusion rule loaded from resource files.
//!
//! Fixtures live in tests/data/: a set file, a word info file and a small
//! trigram counts file.

use std::path::PathBuf;

use confusion_core::rule_match::RuleMatch;
use confusion_core::token::Token;
use confusion_ngram::table::NgramTable;
use confusion_rule::loader::{LoaderOptions, ResourceError};
use confusion_rule::rule::ConfusionRule;
use confusion_rule::SentenceRule;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn load_rule(options: LoaderOptions) -> ConfusionRule<NgramTable> {
    let table = NgramTable::from_path(data("ngrams.tsv"))
        .unwrap_or_else(|e| panic!("failed to load ngrams.tsv: {e}"));
    ConfusionRule::from_resources(
        table,
        &data("homophones.txt"),
        Some(&data("homophones-info.txt")),
        options,
    )
    .unwrap_or_else(|e| panic!("failed to build rule: {e}"))
}

/// Tokens of a sentence whose words are separated by single spaces.
fn sentence(text: &str) -> Vec<Token> {
    let mut pos = 0;
    text.split(' ')
        .map(|w| {
            let t = Token::new(w, pos);
            pos = t.end_pos() + 1;
            t
        })
        .collect()
}

#[test]
fn gate_removes_unreliable_words() {
    let rule = load_rule(LoaderOptions::default());
    let registry = rule.registry();
    assert!(registry.lookup("they're").is_none());
    assert_eq!(registry.lookup("there").unwrap().words(), ["their", "there"]);
    assert_eq!(registry.lookup("two").unwrap().words(), ["to", "too", "two"]);
}

#[test]
fn flags_wrong_homophone() {
    let rule = load_rule(LoaderOptions::default());
    let matches = rule
        .match_sentence(&sentence("I went to there house yesterday"))
        .unwrap();
    assert_eq!(
        matches,
        [RuleMatch::new(
            "CONFUSION_RULE",
            10,
            15,
            "Statistic suggests that 'their' might be the right word here. Please check.",
            "their",
        )]
    );
}

#[test]
fn correct_text_is_left_alone() {
    let rule = load_rule(LoaderOptions::default());
    for text in ["I went to their house yesterday", "it is too late"] {
        let matches = rule.match_sentence(&sentence(text)).unwrap();
        assert!(matches.is_empty(), "unexpected matches for {text:?}: {matches:?}");
    }
}

#[test]
fn comma_context_is_skipped() {
    let rule = load_rule(LoaderOptions::default());
    let matches = rule
        .match_sentence(&sentence("I went to there , house yesterday"))
        .unwrap();
    assert!(matches.is_empty());
}

#[test]
fn strict_gate_disables_the_rule() {
    let rule = load_rule(LoaderOptions {
        min_sentences: 1000,
        ..Default::default()
    });
    assert!(rule.registry().is_empty());
    let matches = rule
        .match_sentence(&sentence("I went to there house yesterday"))
        .unwrap();
    assert!(matches.is_empty());
}

#[test]
fn missing_resource_fails_construction() {
    let result = ConfusionRule::from_resources(
        NgramTable::new(),
        &data("no-such-file.txt"),
        None,
        LoaderOptions::default(),
    );
    assert!(matches!(result, Err(ResourceError::Io { .. })));
}

#[test]
fn matches_serialize_for_formatters() {
    let rule = load_rule(LoaderOptions::default());
    let matches = rule
        .match_sentence(&sentence("I went to there house yesterday"))
        .unwrap();
    let json = serde_json::to_value(&matches).unwrap();
    assert_eq!(json[0]["startPos"], 10);
    assert_eq!(json[0]["endPos"], 15);
    assert_eq!(json[0]["suggestedReplacement"], "their");
    assert_eq!(json[0]["ruleId"], "CONFUSION_RULE");
}
