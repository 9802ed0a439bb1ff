// confusion-cli: shared utilities for the command-line driver.

use std::path::PathBuf;
use std::process;

use confusion_core::token::Token;
use confusion_ngram::cache::CachedLookup;
use confusion_ngram::table::NgramTable;
use confusion_rule::engine::ConfusionOptions;
use confusion_rule::loader::LoaderOptions;
use confusion_rule::rule::{ConfusionRule, RuleDescriptor};

/// Default n-gram counts file name.
const NGRAMS_FILE: &str = "ngrams.tsv";

/// Default confusion set file name.
const SETS_FILE: &str = "homophones.txt";

/// Default word info file name.
const INFO_FILE: &str = "homophones-info.txt";

/// Environment variable naming the data directory.
const DATA_PATH_ENV: &str = "CONFUSION_DATA_PATH";

/// The rule type the CLI runs.
pub type CliRule = ConfusionRule<CachedLookup<NgramTable>>;

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    pub ngrams: Option<PathBuf>,
    pub confusion: Option<PathBuf>,
    pub info: Option<PathBuf>,
    pub advantage: Option<f64>,
    pub json: bool,
    pub help: bool,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = || -> Result<String, String> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| format!("{flag} requires a value")),
            }
        };

        match flag {
            "-n" | "--ngrams" => parsed.ngrams = Some(PathBuf::from(value()?)),
            "-c" | "--confusion" => parsed.confusion = Some(PathBuf::from(value()?)),
            "-i" | "--info" => parsed.info = Some(PathBuf::from(value()?)),
            "--advantage" => {
                let v = value()?;
                parsed.advantage = Some(
                    v.parse()
                        .map_err(|_| format!("invalid value for --advantage: {v}"))?,
                );
            }
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(parsed)
}

/// Resolve the data files and build the rule.
///
/// Explicit paths win; missing ones are looked up in the directory named by
/// `CONFUSION_DATA_PATH`, then in the current directory. The info file is
/// optional.
pub fn load_rule(args: &Args) -> Result<CliRule, String> {
    let data_dir = std::env::var(DATA_PATH_ENV)
        .map(PathBuf::from)
        .or_else(|_| std::env::current_dir())
        .map_err(|e| format!("cannot determine data directory: {e}"))?;

    let ngrams = args
        .ngrams
        .clone()
        .unwrap_or_else(|| data_dir.join(NGRAMS_FILE));
    let confusion = args
        .confusion
        .clone()
        .unwrap_or_else(|| data_dir.join(SETS_FILE));
    let info = match &args.info {
        Some(path) => Some(path.clone()),
        None => Some(data_dir.join(INFO_FILE)).filter(|p| p.is_file()),
    };

    let table = NgramTable::from_path(&ngrams)
        .map_err(|e| format!("failed to load n-gram counts from {}: {e}", ngrams.display()))?;

    let rule = ConfusionRule::from_resources(
        CachedLookup::new(table),
        &confusion,
        info.as_deref(),
        LoaderOptions::default(),
    )
    .map_err(|e| format!("failed to load confusion sets: {e}"))?;

    let options = ConfusionOptions {
        text_score_advantage: args
            .advantage
            .unwrap_or(ConfusionOptions::default().text_score_advantage),
        ..Default::default()
    };

    Ok(rule
        .with_options(options)
        .with_descriptor(RuleDescriptor::english()))
}

/// Build tokens from text whose tokens are already separated by whitespace.
///
/// Offsets are character offsets into `text`. No linguistic tokenization
/// happens here: `"well,"` stays one token.
pub fn split_pretokenized(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (pos, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut current), start));
            }
        } else {
            if current.is_empty() {
                start = pos;
            }
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(Token::new(current, start));
    }

    tokens
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_short_and_long_flags() {
        let parsed = parse_args(&args(&[
            "-n",
            "counts.tsv",
            "--confusion=sets.txt",
            "--info",
            "info.txt",
            "--advantage",
            "2.5",
            "--json",
        ]))
        .unwrap();
        assert_eq!(parsed.ngrams, Some(PathBuf::from("counts.tsv")));
        assert_eq!(parsed.confusion, Some(PathBuf::from("sets.txt")));
        assert_eq!(parsed.info, Some(PathBuf::from("info.txt")));
        assert_eq!(parsed.advantage, Some(2.5));
        assert!(parsed.json);
        assert!(!parsed.help);
    }

    #[test]
    fn parse_help() {
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }

    #[test]
    fn parse_missing_value() {
        let err = parse_args(&args(&["--ngrams"])).unwrap_err();
        assert_eq!(err, "--ngrams requires a value");
    }

    #[test]
    fn parse_bad_advantage() {
        assert!(parse_args(&args(&["--advantage=lots"])).is_err());
    }

    #[test]
    fn parse_unknown_flag() {
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn split_offsets_are_char_based() {
        let tokens = split_pretokenized("\u{00E9}t\u{00E9}  is  here");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["\u{00E9}t\u{00E9}", "is", "here"]);
        assert_eq!(tokens[0].pos, 0);
        assert_eq!(tokens[1].pos, 5);
        assert_eq!(tokens[2].pos, 9);
    }

    #[test]
    fn split_keeps_punctuation_attached() {
        let tokens = split_pretokenized("well, there");
        assert_eq!(tokens[0].text, "well,");
        assert_eq!(tokens[1].pos, 6);
    }

    #[test]
    fn split_empty_and_blank() {
        assert!(split_pretokenized("").is_empty());
        assert!(split_pretokenized(" \t ").is_empty());
    }
}
