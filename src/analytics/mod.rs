//! Corpus-level analytics over headlines
//!
//! - [`keywords`] - top-N keyword frequencies
//! - [`daily`] - daily sentiment means per (date, symbol)

pub mod daily;
pub mod keywords;

pub use daily::{aggregate_daily, for_symbol, scored_rows, DailyAggregator};
pub use keywords::{checked_top_n, top_keywords, KeywordCounter};
