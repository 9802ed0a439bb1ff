// Confusion-set resource loading with the homophone quality gate
//
// Two resources describe the confusable words:
//
// - the set file: one confusion set per line, members separated by `|`
//   (e.g. `their|there|they're`);
// - the optional info file: `word<TAB>sentences<TAB>error_rate` per line,
//   where `sentences` is how many test sentences the word was evaluated on
//   and `error_rate` the measured false-alarm rate in percent.
//
// In both files blank lines and lines starting with `#` are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use tracing::{debug, info};

use crate::registry::{ConfusionRegistry, ConfusionSet};

/// Minimum number of evaluation sentences a word needs. Default: 0.
pub const MIN_SENTENCES: u32 = 0;

/// Maximum error rate (percent) a word may have. Default: 10.0.
pub const MAX_ERROR_RATE: f32 = 10.0;

/// Member separator in the set file.
const SET_SEPARATOR: char = '|';

/// Error type for registry resource loading. Any of these makes the rule
/// fail to initialize.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{resource}:{line}: {message}")]
    Parse {
        resource: String,
        line: usize,
        message: String,
    },
}

/// Quality gate applied to every confusable word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderOptions {
    /// Words evaluated on fewer sentences than this are dropped.
    pub min_sentences: u32,
    /// Words with a higher error rate (percent) than this are dropped.
    pub max_error_rate: f32,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            min_sentences: MIN_SENTENCES,
            max_error_rate: MAX_ERROR_RATE,
        }
    }
}

/// Evaluation statistics for one confusable word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordInfo {
    pub sentences: u32,
    pub error_rate: f32,
}

/// Builds a [`ConfusionRegistry`] from the set and info resources.
#[derive(Debug, Clone, Default)]
pub struct ConfusionSetLoader {
    options: LoaderOptions,
}

impl ConfusionSetLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Load the registry from files on disk. `info_path` may be omitted, in
    /// which case no word is filtered out.
    pub fn load_files(
        &self,
        sets_path: &Path,
        info_path: Option<&Path>,
    ) -> Result<ConfusionRegistry, ResourceError> {
        let sets = parse_confusion_sets(open(sets_path)?, &sets_path.display().to_string())
            .map_err(|e| with_path(e, sets_path))?;
        let info = match info_path {
            Some(path) => Some(
                parse_word_info(open(path)?, &path.display().to_string())
                    .map_err(|e| with_path(e, path))?,
            ),
            None => None,
        };
        Ok(self.build(sets, info.as_ref()))
    }

    /// Load the registry from readers.
    pub fn load<S: BufRead, I: BufRead>(
        &self,
        sets: S,
        info: Option<I>,
    ) -> Result<ConfusionRegistry, ResourceError> {
        let sets = parse_confusion_sets(sets, "confusion sets")?;
        let info = info
            .map(|reader| parse_word_info(reader, "word info"))
            .transpose()?;
        Ok(self.build(sets, info.as_ref()))
    }

    /// Apply the quality gate and build the registry.
    pub fn build(
        &self,
        sets: Vec<ConfusionSet>,
        info: Option<&HashMap<String, WordInfo>>,
    ) -> ConfusionRegistry {
        let total = sets.len();
        let kept: Vec<ConfusionSet> = sets
            .into_iter()
            .filter_map(|set| self.gate(set, info))
            .collect();

        let registry = ConfusionRegistry::from_sets(kept);
        info!(
            sets = total,
            words = registry.len(),
            "loaded confusion sets"
        );
        registry
    }

    /// Keep the members that pass the gate; drop the set if fewer than two
    /// remain.
    fn gate(
        &self,
        set: ConfusionSet,
        info: Option<&HashMap<String, WordInfo>>,
    ) -> Option<ConfusionSet> {
        let Some(info) = info else {
            return Some(set);
        };

        let members: Vec<&str> = set
            .iter()
            .filter(|word| match info.get(*word) {
                Some(stats) => self.accepts(stats),
                None => false,
            })
            .collect();

        if members.len() < 2 {
            debug!(%set, "dropping confusion set below quality threshold");
            return None;
        }
        Some(ConfusionSet::new(members))
    }

    fn accepts(&self, stats: &WordInfo) -> bool {
        stats.sentences >= self.options.min_sentences
            && stats.error_rate <= self.options.max_error_rate
    }
}

/// Parse the set file.
pub fn parse_confusion_sets<R: BufRead>(
    reader: R,
    resource: &str,
) -> Result<Vec<ConfusionSet>, ResourceError> {
    let mut sets = Vec::new();

    for (line_no, line) in content_lines(reader) {
        let line = line?;
        let members: Vec<&str> = line
            .split(SET_SEPARATOR)
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect();
        let set = ConfusionSet::new(members);
        if set.len() < 2 {
            return Err(parse_error(
                resource,
                line_no,
                "a confusion set needs at least two different words",
            ));
        }
        sets.push(set);
    }

    Ok(sets)
}

/// Parse the info file.
pub fn parse_word_info<R: BufRead>(
    reader: R,
    resource: &str,
) -> Result<HashMap<String, WordInfo>, ResourceError> {
    let mut info = HashMap::new();

    for (line_no, line) in content_lines(reader) {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let [word, sentences, error_rate] = fields.as_slice() else {
            return Err(parse_error(
                resource,
                line_no,
                "expected word<TAB>sentences<TAB>error_rate",
            ));
        };

        let sentences: u32 = sentences.parse().map_err(|_| {
            parse_error(resource, line_no, format!("invalid sentence count {sentences:?}"))
        })?;
        let error_rate: f32 = match error_rate.parse::<f32>() {
            Ok(rate) if rate.is_finite() && rate >= 0.0 => rate,
            _ => {
                return Err(parse_error(
                    resource,
                    line_no,
                    format!("invalid error rate {error_rate:?}"),
                ));
            }
        };

        info.insert(
            (*word).to_string(),
            WordInfo {
                sentences,
                error_rate,
            },
        );
    }

    Ok(info)
}

/// Non-comment, non-blank lines with 1-based line numbers.
fn content_lines<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = (usize, Result<String, ResourceError>)> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let line = line.map_err(|source| ResourceError::Io {
                path: PathBuf::new(),
                source,
            });
            (idx + 1, line)
        })
        .filter(|(_, line)| match line {
            Ok(text) => {
                let text = text.trim();
                !text.is_empty() && !text.starts_with('#')
            }
            Err(_) => true,
        })
}

fn parse_error(resource: &str, line: usize, message: impl Into<String>) -> ResourceError {
    ResourceError::Parse {
        resource: resource.to_string(),
        line,
        message: message.into(),
    }
}

fn open(path: &Path) -> Result<BufReader<File>, ResourceError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Attach the file path to read errors raised mid-stream.
fn with_path(err: ResourceError, path: &Path) -> ResourceError {
    match err {
        ResourceError::Io { source, .. } => ResourceError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}
