//! headline-sentiment - sentiment analysis for stock news headlines
//!
//! Stateless transforms for scoring, labeling and summarizing headlines.
//!
//! # Architecture
//!
//! - [`sentiment`] - VADER polarity scoring and Positive/Negative/Neutral labels
//! - [`text`] - headline cleaning for keyword analysis
//! - [`analytics`] - top keywords and daily per-symbol sentiment means
//! - [`lexicon`] - injectable polarity lexicon and stopword set
//! - [`table`] - CSV loading and result writing
//! - [`pipeline`] - table-level steps used by the command line tool
//! - [`config`] - configuration management
//! - [`models`] - core data structures
//!
//! # Example
//!
//! ```no_run
//! use headline_sentiment::analytics::top_keywords;
//! use headline_sentiment::sentiment::{categorize, score};
//!
//! let score = score("Shares soar after record quarterly profit");
//! println!("{} ({})", score.compound, categorize(score.compound));
//!
//! for keyword in top_keywords(["Stocks rally", "Stocks slump"], 5) {
//!     println!("{}: {}", keyword.token, keyword.count);
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod sentiment;
pub mod table;
pub mod text;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{aggregate_daily, top_keywords, DailyAggregator, KeywordCounter};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::lexicon::{Lexicon, StopwordSet};
    pub use crate::models::{
        DailySentimentRecord, KeywordFrequency, ScoredHeadline, ScoredRow, SentimentLabel,
        SentimentScore,
    };
    pub use crate::sentiment::{categorize, label_all, score, score_all, SentimentScorer};
    pub use crate::text::{clean, TextPreprocessor};
}

// Direct re-exports for convenience
pub use models::{DailySentimentRecord, KeywordFrequency, ScoredRow, SentimentLabel, SentimentScore};
