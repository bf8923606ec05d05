//! Sentiment scoring of raw headline text
//!
//! Scoring is delegated to a [`PolarityModel`]. The default model is
//! [`LexiconModel::vader`], the VADER ruleset over the bundled lexicon,
//! which is parsed once per process on first use and only read after that.

use crate::models::{ScoredHeadline, SentimentScore};
use crate::sentiment::vader::LexiconModel;
use std::sync::{Arc, LazyLock};

static DEFAULT_MODEL: LazyLock<LexiconModel> = LazyLock::new(LexiconModel::vader);

/// A lexicon-based polarity model producing four scores per text
pub trait PolarityModel: Send + Sync {
    /// Score raw, unprocessed text
    fn polarity_scores(&self, text: &str) -> SentimentScore;
}

/// Scores headlines with a shared polarity model
#[derive(Clone)]
pub struct SentimentScorer {
    model: Arc<dyn PolarityModel>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(LexiconModel::vader())
    }
}

impl std::fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentScorer").finish_non_exhaustive()
    }
}

impl SentimentScorer {
    /// Create a scorer over a specific model
    pub fn new(model: impl PolarityModel + 'static) -> Self {
        Self {
            model: Arc::new(model),
        }
    }

    /// Score a single text
    pub fn score(&self, text: &str) -> SentimentScore {
        self.model.polarity_scores(text)
    }

    /// Score every text, one output per input in input order
    pub fn score_all<I, S>(&self, texts: I) -> Vec<ScoredHeadline>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let scored: Vec<ScoredHeadline> = texts
            .into_iter()
            .map(|text| {
                let text = text.as_ref();
                ScoredHeadline {
                    headline: text.to_string(),
                    score: self.score(text),
                }
            })
            .collect();

        tracing::debug!(rows = scored.len(), "Scored headlines");
        scored
    }
}

/// Score a text with the default VADER model
pub fn score(text: &str) -> SentimentScore {
    DEFAULT_MODEL.polarity_scores(text)
}

/// Score texts with the default VADER model, preserving order
pub fn score_all<I, S>(texts: I) -> Vec<ScoredHeadline>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SentimentScorer::default().score_all(texts)
}
