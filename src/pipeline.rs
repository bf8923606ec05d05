//! Table-level steps chaining the transforms the way the CLI runs them
//!
//! headlines → scores → labels, headlines → keywords, and
//! scored rows → daily means.

use crate::analytics::{scored_rows, DailyAggregator, KeywordCounter};
use crate::error::Result;
use crate::lexicon::StopwordSet;
use crate::models::{DailySentimentRecord, KeywordFrequency};
use crate::sentiment::categorizer::{label_all, COMPOUND_FIELD, LABEL_FIELD};
use crate::sentiment::SentimentScorer;
use crate::table::{Field, InputColumns, Table};
use crate::text::TextPreprocessor;

/// Score columns appended by [`score_table`]
pub const SCORE_FIELDS: [&str; 4] = ["neg", "neu", "pos", COMPOUND_FIELD];

/// Score the headline column and append neg/neu/pos/compound to every row
pub fn score_table(table: &mut Table, scorer: &SentimentScorer, columns: &InputColumns) -> Result<()> {
    let scores: Vec<_> = table
        .texts(&columns.headline)?
        .into_iter()
        .map(|text| scorer.score(text))
        .collect();

    for field in SCORE_FIELDS {
        table.add_column(field);
    }

    for (row, score) in table.rows_mut().iter_mut().zip(scores) {
        for (field, value) in SCORE_FIELDS
            .iter()
            .zip([score.neg, score.neu, score.pos, score.compound])
        {
            row.insert((*field).to_string(), Field::Number(value));
        }
    }

    tracing::info!(rows = table.len(), "Scored headline table");
    Ok(())
}

/// Append the `Sentiment` label column from `compound`
pub fn label_table(table: &mut Table) -> Result<()> {
    label_all(table.rows_mut())?;
    table.add_column(LABEL_FIELD);
    Ok(())
}

/// Top keywords of the headline column
pub fn table_keywords(
    table: &Table,
    columns: &InputColumns,
    stopwords: &StopwordSet,
    n: usize,
) -> Result<Vec<KeywordFrequency>> {
    let texts = table.texts(&columns.headline)?;
    let counter = KeywordCounter::from_texts(texts, &TextPreprocessor::new(stopwords));
    tracing::info!(distinct = counter.len(), n, "Extracted keywords");
    Ok(counter.top(n))
}

/// Daily means from a table that already carries score columns
pub fn table_daily(table: &Table, columns: &InputColumns) -> Result<Vec<DailySentimentRecord>> {
    let rows = scored_rows(table.rows(), columns)?;
    let mut aggregator = DailyAggregator::new();
    aggregator.extend(&rows);
    tracing::info!(rows = rows.len(), groups = aggregator.len(), "Aggregated daily sentiment");
    Ok(aggregator.finish())
}
