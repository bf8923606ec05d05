//! Injectable text resources: polarity lexicon and stopword set
//!
//! Both resources are plain values so callers and tests can supply
//! fixtures of known size. The defaults are the VADER lexicon and the
//! NLTK English stopword list, embedded at compile time and shared
//! process-wide after first use.
//!
//! Lexicon files use the VADER layout: one entry per line, tab separated,
//! `token<TAB>mean valence[<TAB>std dev<TAB>raw ratings]`.

use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

const ENGLISH_STOPWORDS: &str = include_str!("../../resources/stopwords_english.txt");

const VADER_LEXICON: &str = include_str!("../../resources/vader_lexicon.txt");

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| {
    let lexicon = Lexicon::parse(VADER_LEXICON).expect("Invalid bundled VADER lexicon");
    tracing::debug!(entries = lexicon.len(), "Initialized VADER lexicon");
    lexicon
});

static DEFAULT_STOPWORDS: LazyLock<StopwordSet> =
    LazyLock::new(|| StopwordSet::from_words(ENGLISH_STOPWORDS.lines()));

/// Word-to-valence mapping used by the rule-based polarity model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Build a lexicon from `(token, valence)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(token, valence)| (token.into(), valence))
                .collect(),
        }
    }

    /// Parse a lexicon in VADER tab-separated layout
    ///
    /// Blank lines are skipped. Only the first two columns are read.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }

            let mut columns = line.split('\t');
            let token = columns.next().unwrap_or_default();
            if token.is_empty() {
                return Err(Error::Lexicon {
                    line: idx + 1,
                    reason: "empty token".to_string(),
                });
            }

            let raw = columns.next().ok_or_else(|| Error::Lexicon {
                line: idx + 1,
                reason: format!("missing valence for '{token}'"),
            })?;

            let valence: f64 = raw.trim().parse().map_err(|_| Error::Lexicon {
                line: idx + 1,
                reason: format!("invalid valence '{raw}' for '{token}'"),
            })?;

            entries.insert(token.to_string(), valence);
        }

        Ok(Self { entries })
    }

    /// Load a lexicon file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let lexicon = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), entries = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }

    /// The shared VADER lexicon
    pub fn vader() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    /// Valence of a token, if present
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    /// Check whether a token is in the lexicon
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Set of words excluded from keyword analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a stopword set; entries are trimmed and lowercased, blanks skipped
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load a one-word-per-line stopword file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_words(content.lines());
        tracing::debug!(path = %path.display(), words = set.len(), "Loaded stopwords");
        Ok(set)
    }

    /// The shared NLTK English stopword list
    pub fn english() -> &'static StopwordSet {
        &DEFAULT_STOPWORDS
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
