//! Common test utilities

use chrono::NaiveDate;
use headline_sentiment::lexicon::Lexicon;
use headline_sentiment::models::ScoredRow;
use headline_sentiment::sentiment::{LexiconModel, SentimentScorer};
use std::io::Write;
use tempfile::NamedTempFile;

/// Headline CSV in the layout of the analyst ratings dataset
#[allow(dead_code)]
pub const SAMPLE_CSV: &str = "\
headline,url,publisher,date,stock
Good quarter for ACME,https://example.com/1,Wire,2024-01-02 09:30:00-04:00,ACME
ACME misses estimates in bad quarter,https://example.com/2,Wire,2024-01-02 16:00:00-04:00,ACME
BETA announces quarterly dividend,https://example.com/3,Desk,2024-01-01,BETA
";

/// Two-word lexicon in VADER file layout
#[allow(dead_code)]
pub const FIXTURE_LEXICON: &str = "good\t1.9\t0.9434\t[2, 1, 2, 2, 3, 2, 1, 2, 2, 2]\n\
bad\t-2.5\t0.67082\t[-3, -2, -2, -3, -2, -3, -2, -3, -2, -3]\n";

/// Scorer over the fixture lexicon
#[allow(dead_code)]
pub fn fixture_scorer() -> SentimentScorer {
    SentimentScorer::new(LexiconModel::new(Lexicon::from_pairs([
        ("good", 1.9),
        ("bad", -2.5),
    ])))
}

/// Write contents to a temporary file with the given suffix
#[allow(dead_code)]
pub fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes())
        .expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Create a scored row with zero compound
#[allow(dead_code)]
pub fn scored_row(date: NaiveDate, symbol: &str, neg: f64, neu: f64, pos: f64) -> ScoredRow {
    ScoredRow {
        date,
        symbol: symbol.to_string(),
        neg,
        neu,
        pos,
        compound: 0.0,
    }
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
