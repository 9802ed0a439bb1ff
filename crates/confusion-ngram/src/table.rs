// In-memory n-gram count table
//
// Counts file format, one n-gram per line:
//
//     <word> [<word> [<word>]]<TAB><count>
//
// Words are separated by single spaces or any run of whitespace. Lines that
// are empty or start with `#` are skipped. Repeated n-grams are summed, so
// per-year corpus dumps can be loaded without pre-aggregation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use tracing::debug;

use crate::{FrequencyLookup, LookupError, MAX_NGRAM_ORDER, check_order};

/// Error type for loading a counts file.
#[derive(Debug, thiserror::Error)]
pub enum NgramError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// N-gram counts held in memory, keyed by the space-joined n-gram.
#[derive(Debug, Clone, Default)]
pub struct NgramTable {
    counts: HashMap<String, u64>,
}

impl NgramTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `ngram`.
    ///
    /// Panics if `ngram` is empty or longer than [`MAX_NGRAM_ORDER`] words.
    pub fn insert(&mut self, ngram: &[&str], count: u64) {
        assert!(
            !ngram.is_empty() && ngram.len() <= MAX_NGRAM_ORDER,
            "n-gram must have 1 to {MAX_NGRAM_ORDER} words"
        );
        let entry = self.counts.entry(ngram.join(" ")).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Number of distinct n-grams in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no n-grams.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Load a counts file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NgramError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| NgramError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            NgramError::Io { source, .. } => NgramError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Load counts from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, NgramError> {
        let mut table = Self::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| NgramError::Io {
                path: PathBuf::new(),
                source,
            })?;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let (ngram, count) = line.rsplit_once('\t').ok_or_else(|| NgramError::Parse {
                line: line_no,
                message: "expected <ngram><TAB><count>".to_string(),
            })?;
            let count: u64 = count.trim().parse().map_err(|_| NgramError::Parse {
                line: line_no,
                message: format!("invalid count {:?}", count.trim()),
            })?;
            let words: Vec<&str> = ngram.split_whitespace().collect();
            if words.is_empty() || words.len() > MAX_NGRAM_ORDER {
                return Err(NgramError::Parse {
                    line: line_no,
                    message: format!(
                        "n-gram has {} words, expected 1 to {MAX_NGRAM_ORDER}",
                        words.len()
                    ),
                });
            }

            table.insert(&words, count);
        }

        debug!(ngrams = table.len(), "loaded n-gram counts");
        Ok(table)
    }
}

impl FrequencyLookup for NgramTable {
    fn count(&self, ngram: &[&str]) -> Result<u64, LookupError> {
        check_order(ngram)?;
        Ok(self.counts.get(ngram.join(" ").as_str()).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_count() {
        let mut table = NgramTable::new();
        table.insert(&["over", "there", "is"], 40);
        table.insert(&["there"], 9);
        assert_eq!(table.count(&["over", "there", "is"]).unwrap(), 40);
        assert_eq!(table.count(&["there"]).unwrap(), 9);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unknown_ngram_counts_zero() {
        let table = NgramTable::new();
        assert!(table.is_empty());
        assert_eq!(table.count(&["never", "seen", "this"]).unwrap(), 0);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut table = NgramTable::new();
        table.insert(&["There", "is"], 3);
        assert_eq!(table.count(&["there", "is"]).unwrap(), 0);
    }

    #[test]
    fn too_long_lookup_is_error() {
        let table = NgramTable::new();
        assert!(matches!(
            table.count(&["a", "b", "c", "d"]),
            Err(LookupError::UnsupportedOrder(4))
        ));
    }

    #[test]
    fn parse_counts_file() {
        let data = "# comment\n\
                    their house is\t120\n\
                    there house is\t2\n\
                    \n\
                    their house is\t30\r\n\
                    house\t1000\n";
        let table = NgramTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.count(&["their", "house", "is"]).unwrap(), 150);
        assert_eq!(table.count(&["there", "house", "is"]).unwrap(), 2);
        assert_eq!(table.count(&["house"]).unwrap(), 1000);
    }

    #[test]
    fn parse_collapses_inner_whitespace() {
        // The last tab separates the count, so "a  b\tc" is the n-gram.
        let table = NgramTable::from_reader("a  b\tc\t4\n".as_bytes()).unwrap();
        assert_eq!(table.count(&["a", "b", "c"]).unwrap(), 4);
    }

    #[test]
    fn parse_missing_tab() {
        let err = NgramTable::from_reader("one two 3\n".as_bytes()).unwrap_err();
        match err {
            NgramError::Parse { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_bad_count() {
        let err = NgramTable::from_reader("ok\t1\nbad\t-4\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: invalid count \"-4\"");
    }

    #[test]
    fn parse_too_many_words() {
        let err = NgramTable::from_reader("a b c d\t1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, NgramError::Parse { line: 1, .. }));
    }

    #[test]
    fn missing_file_names_path() {
        let err = NgramTable::from_path("/nonexistent/ngrams.tsv").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/ngrams.tsv"));
    }
}
