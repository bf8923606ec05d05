//! Headline cleaning: lowercase, strip punctuation and non-letters, drop stopwords
//!
//! The steps run in a fixed order, each feeding the next:
//! 1. lowercase the whole string
//! 2. remove ASCII punctuation
//! 3. remove anything that is not `a-z` or whitespace (digits, accented letters)
//! 4. split on whitespace
//! 5. drop stopwords
//! 6. join survivors with single spaces
//!
//! The output only contains `a-z` and single spaces, so cleaning is idempotent.

use crate::lexicon::StopwordSet;
use regex::Regex;
use std::sync::LazyLock;

static NON_LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("Invalid regex pattern"));

/// Clean a text with the default English stopwords
pub fn clean(text: &str) -> String {
    TextPreprocessor::default().clean(text)
}

/// Text cleaner bound to a stopword set
#[derive(Debug, Clone, Copy)]
pub struct TextPreprocessor<'a> {
    stopwords: &'a StopwordSet,
}

impl Default for TextPreprocessor<'static> {
    fn default() -> Self {
        Self {
            stopwords: StopwordSet::english(),
        }
    }
}

impl<'a> TextPreprocessor<'a> {
    /// Create a preprocessor with a custom stopword set
    pub fn new(stopwords: &'a StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Clean a text into a space-joined token string
    pub fn clean(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    /// Clean a text and return the surviving tokens in order
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let no_punct: String = lowered
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();
        let letters_only = NON_LETTER_REGEX.replace_all(&no_punct, "");

        letters_only
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }
}
