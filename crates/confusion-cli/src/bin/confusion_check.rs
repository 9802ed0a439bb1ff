// confusion-check: flag easily confused words in pre-tokenized text.
//
// Reads one sentence per line from stdin, tokens separated by whitespace,
// and prints every suggested replacement.
//
// Usage:
//   confusion-check [OPTIONS] < sentences.txt
//
// Options:
//   -n, --ngrams PATH      Trigram counts file (default: ngrams.tsv)
//   -c, --confusion PATH   Confusion set file (default: homophones.txt)
//   -i, --info PATH        Word info file for the quality gate (optional)
//   --advantage X          Score bonus for the word as written (default: 0)
//   --json                 Print one JSON array of matches per sentence
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use confusion_core::rule_match::RuleMatch;
use confusion_rule::SentenceRule;

fn print_help() {
    println!("confusion-check: flag easily confused words using trigram statistics.");
    println!();
    println!("Usage: confusion-check [OPTIONS] < sentences.txt");
    println!();
    println!("Reads one pre-tokenized sentence per line from stdin.");
    println!("Data files default to the directory in CONFUSION_DATA_PATH,");
    println!("or the current directory.");
    println!();
    println!("Options:");
    println!("  -n, --ngrams PATH      Trigram counts file (default: ngrams.tsv)");
    println!("  -c, --confusion PATH   Confusion set file (default: homophones.txt)");
    println!("  -i, --info PATH        Word info file (default: homophones-info.txt, if present)");
    println!("  --advantage X          Score bonus for the word as written (default: 0)");
    println!("  --json                 Print matches as JSON, one array per line");
    println!("  -h, --help             Print this help");
}

fn print_pretty(
    sentence: &str,
    matches: &[RuleMatch],
    out: &mut impl Write,
) -> io::Result<()> {
    let chars: Vec<char> = sentence.chars().collect();

    for m in matches {
        let flagged: String = chars
            .iter()
            .skip(m.start_pos)
            .take(m.len())
            .collect();

        writeln!(out, "{sentence}")?;
        writeln!(out, "E: {} (start={})", m.message, m.start_pos)?;
        writeln!(out, "E: \"{flagged}\"")?;
        writeln!(out, "S:  \"{}\"", m.suggested_replacement)?;
        writeln!(out, "=================================================")?;
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = confusion_cli::parse_args(&args).unwrap_or_else(|e| confusion_cli::fatal(&e));

    if args.help {
        print_help();
        return;
    }

    confusion_cli::init_logging();

    let rule = confusion_cli::load_rule(&args).unwrap_or_else(|e| confusion_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| confusion_cli::fatal(&format!("reading stdin: {e}")));
        let sentence = line.trim_end();
        if sentence.trim().is_empty() {
            continue;
        }

        let tokens = confusion_cli::split_pretokenized(sentence);
        let matches = rule
            .match_sentence(&tokens)
            .unwrap_or_else(|e| confusion_cli::fatal(&e.to_string()));

        let written = if args.json {
            serde_json::to_string(&matches)
                .map_err(io::Error::other)
                .and_then(|json| writeln!(out, "{json}"))
        } else {
            print_pretty(sentence, &matches, &mut out)
        };
        if let Err(e) = written {
            confusion_cli::fatal(&format!("writing output: {e}"));
        }
    }

    if let Err(e) = out.flush() {
        confusion_cli::fatal(&format!("writing output: {e}"));
    }

    let lookup = rule.lookup();
    tracing::info!(
        hits = lookup.hits(),
        misses = lookup.misses(),
        "n-gram cache statistics"
    );
}
