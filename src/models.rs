// Core data structures for headline sentiment analysis

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity scores for a single text
///
/// `neg`, `neu` and `pos` are proportions of the text and sum to ~1.0
/// whenever the text has at least one token. `compound` is the
/// normalized overall polarity in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl SentimentScore {
    /// All-zero score returned for text without tokens
    pub const ZERO: Self = Self {
        neg: 0.0,
        neu: 0.0,
        pos: 0.0,
        compound: 0.0,
    };

    /// Label derived from the compound score
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_compound(self.compound)
    }
}

/// Discrete sentiment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Compound threshold at or above which text is Positive
    pub const POSITIVE_THRESHOLD: f64 = 0.05;

    /// Compound threshold at or below which text is Negative
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Classify a compound score
    ///
    /// Both boundaries are inclusive of their category. NaN falls through
    /// to Neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= Self::POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound <= Self::NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Create from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A headline paired with its scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredHeadline {
    pub headline: String,
    #[serde(flatten)]
    pub score: SentimentScore,
}

/// A scored headline with its label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledHeadline {
    pub headline: String,
    #[serde(flatten)]
    pub score: SentimentScore,
    #[serde(rename = "Sentiment")]
    pub sentiment: SentimentLabel,
}

/// Occurrence count of a cleaned token across a corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub token: String,
    pub count: u64,
}

impl KeywordFrequency {
    pub fn new(token: impl Into<String>, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

impl From<(&str, u64)> for KeywordFrequency {
    fn from((token, count): (&str, u64)) -> Self {
        Self::new(token, count)
    }
}

/// One scored headline row with its grouping fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    pub date: NaiveDate,
    #[serde(rename = "stock")]
    pub symbol: String,
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    #[serde(default)]
    pub compound: f64,
}

/// Composite grouping key for daily aggregation
///
/// Ordering is by date, then symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DailyKey {
    pub date: NaiveDate,
    pub symbol: String,
}

impl DailyKey {
    pub fn new(date: NaiveDate, symbol: impl Into<String>) -> Self {
        Self {
            date,
            symbol: symbol.into(),
        }
    }
}

/// Mean neg/neu/pos scores for one (date, symbol) pair
///
/// Compound is not aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySentimentRecord {
    pub date: NaiveDate,
    #[serde(rename = "stock")]
    pub symbol: String,
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Number of rows averaged into this record
    pub rows: usize,
}

impl DailySentimentRecord {
    /// Grouping key of this record
    pub fn key(&self) -> DailyKey {
        DailyKey::new(self.date, self.symbol.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for label in [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
        ] {
            assert_eq!(SentimentLabel::parse(label.as_str()), Some(label));
        }
        assert_eq!(SentimentLabel::parse("POSITIVE"), Some(SentimentLabel::Positive));
        assert_eq!(SentimentLabel::parse("bullish"), None);
    }

    #[test]
    fn test_score_label() {
        let score = SentimentScore {
            compound: 0.5,
            ..SentimentScore::ZERO
        };
        assert_eq!(score.label(), SentimentLabel::Positive);
    }

    #[test]
    fn test_daily_key_ordering() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        assert!(DailyKey::new(d1, "ZZZ") < DailyKey::new(d2, "AAA"));
        assert!(DailyKey::new(d1, "AAA") < DailyKey::new(d1, "BBB"));
    }

    #[test]
    fn test_labeled_headline_serialization() {
        let labeled = LabeledHeadline {
            headline: "Stocks rally".to_string(),
            score: SentimentScore {
                neg: 0.0,
                neu: 0.4,
                pos: 0.6,
                compound: 0.4,
            },
            sentiment: SentimentLabel::Positive,
        };

        let json = serde_json::to_value(&labeled).unwrap();
        assert_eq!(json["Sentiment"], "Positive");
        assert_eq!(json["compound"], 0.4);
        assert_eq!(json["headline"], "Stocks rally");
    }

    #[test]
    fn test_daily_record_has_no_compound() {
        let record = DailySentimentRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            symbol: "ACME".to_string(),
            neg: 0.1,
            neu: 0.8,
            pos: 0.1,
            rows: 1,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("compound").is_none());
        assert_eq!(json["stock"], "ACME");
    }
}
