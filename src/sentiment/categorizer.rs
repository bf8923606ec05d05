//! Mapping compound scores to discrete sentiment labels

use crate::error::{Error, Result};
use crate::models::{LabeledHeadline, ScoredHeadline, SentimentLabel};
use crate::table::{Field, Row};

/// Column read by [`label_all`]
pub const COMPOUND_FIELD: &str = "compound";

/// Column written by [`label_all`]
pub const LABEL_FIELD: &str = "Sentiment";

/// Classify a compound score
///
/// `>= 0.05` is Positive, `<= -0.05` is Negative, anything else Neutral.
pub fn categorize(compound: f64) -> SentimentLabel {
    SentimentLabel::from_compound(compound)
}

/// Add or overwrite the `Sentiment` field of every row from its `compound` field
///
/// All rows are validated before any is modified, so a missing or
/// non-numeric `compound` leaves the slice untouched.
pub fn label_all(rows: &mut [Row]) -> Result<()> {
    let labels = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            row.get(COMPOUND_FIELD)
                .and_then(Field::as_number)
                .map(categorize)
                .ok_or_else(|| Error::missing_field(idx, COMPOUND_FIELD))
        })
        .collect::<Result<Vec<_>>>()?;

    for (row, label) in rows.iter_mut().zip(labels) {
        row.insert(LABEL_FIELD.to_string(), Field::Text(label.to_string()));
    }

    tracing::debug!(rows = rows.len(), "Labeled rows");
    Ok(())
}

/// Label already scored headlines
pub fn label_scored(scored: &[ScoredHeadline]) -> Vec<LabeledHeadline> {
    scored
        .iter()
        .map(|row| LabeledHeadline {
            headline: row.headline.clone(),
            score: row.score,
            sentiment: categorize(row.score.compound),
        })
        .collect()
}
