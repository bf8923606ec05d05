//! Headline sentiment: polarity scoring and labeling
//!
//! - [`scorer`] - `PolarityModel` trait, default VADER scoring and batch scoring
//! - [`vader`] - VADER rule engine over an injectable lexicon
//! - [`categorizer`] - compound score to Positive/Negative/Neutral

pub mod categorizer;
pub mod scorer;
pub mod vader;

pub use categorizer::{categorize, label_all, label_scored};
pub use scorer::{score, score_all, PolarityModel, SentimentScorer};
pub use vader::LexiconModel;
