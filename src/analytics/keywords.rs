//! Keyword frequency extraction over cleaned headlines
//!
//! Tokens are counted in first-seen order. Ranking sorts by count only
//! with a stable sort, so tokens with equal counts stay in the order they
//! first appeared in the concatenated token stream.

use crate::error::{Error, Result};
use crate::models::KeywordFrequency;
use crate::text::TextPreprocessor;
use std::collections::HashMap;

/// Running token counts in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordCounter {
    /// Position of each token in `entries`
    index: HashMap<String, usize>,

    /// `(token, count)` in first-seen order
    entries: Vec<(String, u64)>,
}

impl KeywordCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count tokens from every text after cleaning
    pub fn from_texts<I, S>(texts: I, preprocessor: &TextPreprocessor<'_>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counter = Self::new();
        for text in texts {
            counter.observe_all(preprocessor.tokens(text.as_ref()));
        }
        counter
    }

    /// Count one token occurrence
    pub fn observe(&mut self, token: &str) {
        self.add(token, 1);
    }

    /// Count a sequence of tokens
    pub fn observe_all<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.observe(token.as_ref());
        }
    }

    fn add(&mut self, token: &str, count: u64) {
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), count));
            }
        }
    }

    /// Fold another counter into this one
    ///
    /// Counts are summed. Tokens new to `self` are appended in the other
    /// counter's first-seen order, so merging counters built over
    /// consecutive partitions equals counting the whole input at once.
    pub fn merge(&mut self, other: &KeywordCounter) {
        for (token, count) in &other.entries {
            self.add(token, *count);
        }
    }

    /// Count of a single token
    pub fn count(&self, token: &str) -> u64 {
        self.index
            .get(token)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// The `n` most frequent tokens, ties in first-seen order
    pub fn top(&self, n: usize) -> Vec<KeywordFrequency> {
        if n == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(token, count)| KeywordFrequency::new(token.clone(), *count))
            .collect()
    }

    /// Number of distinct tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total token occurrences
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

/// Most common cleaned tokens across texts using the English stopwords
///
/// Returns at most `n` entries; fewer when there are fewer distinct tokens.
pub fn top_keywords<I, S>(texts: I, n: usize) -> Vec<KeywordFrequency>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let counter = KeywordCounter::from_texts(texts, &TextPreprocessor::default());
    tracing::debug!(
        distinct = counter.len(),
        total = counter.total(),
        n,
        "Counted keywords"
    );
    counter.top(n)
}

/// Validate a caller-supplied top-N
///
/// Negative values are rejected rather than clamped.
pub fn checked_top_n(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| Error::InvalidRange {
        name: "top_n",
        value: n,
    })
}
