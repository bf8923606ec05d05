//! Daily sentiment aggregation per (date, symbol)
//!
//! Rows are grouped over an explicit [`DailyKey`] and the neg/neu/pos
//! scores averaged independently. Compound is not carried into the daily
//! records. Output is ordered by date, then symbol.

use crate::error::{Error, Result};
use crate::models::{DailyKey, DailySentimentRecord, ScoredRow};
use crate::table::{Field, InputColumns, Row};
use std::collections::BTreeMap;

/// Per-group running sums
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Accumulator {
    neg: f64,
    neu: f64,
    pos: f64,
    rows: usize,
}

impl Accumulator {
    fn push(&mut self, row: &ScoredRow) {
        self.neg += row.neg;
        self.neu += row.neu;
        self.pos += row.pos;
        self.rows += 1;
    }

    fn absorb(&mut self, other: &Accumulator) {
        self.neg += other.neg;
        self.neu += other.neu;
        self.pos += other.pos;
        self.rows += other.rows;
    }
}

/// Groups scored rows by (date, symbol)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyAggregator {
    groups: BTreeMap<DailyKey, Accumulator>,
}

impl DailyAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row to its group
    pub fn push(&mut self, row: &ScoredRow) {
        self.groups
            .entry(DailyKey::new(row.date, row.symbol.clone()))
            .or_default()
            .push(row);
    }

    /// Add every row
    pub fn extend<'a, I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = &'a ScoredRow>,
    {
        for row in rows {
            self.push(row);
        }
    }

    /// Fold another partial aggregation into this one
    ///
    /// Sums and row counts are combined, so the resulting means are
    /// weighted by group size.
    pub fn merge(&mut self, other: &DailyAggregator) {
        for (key, acc) in &other.groups {
            self.groups.entry(key.clone()).or_default().absorb(acc);
        }
    }

    /// Number of distinct (date, symbol) groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// One record per group, sorted by date then symbol
    pub fn finish(&self) -> Vec<DailySentimentRecord> {
        self.groups
            .iter()
            .map(|(key, acc)| {
                let n = acc.rows as f64;
                DailySentimentRecord {
                    date: key.date,
                    symbol: key.symbol.clone(),
                    neg: acc.neg / n,
                    neu: acc.neu / n,
                    pos: acc.pos / n,
                    rows: acc.rows,
                }
            })
            .collect()
    }
}

/// Average neg/neu/pos per (date, symbol)
pub fn aggregate_daily(rows: &[ScoredRow]) -> Vec<DailySentimentRecord> {
    let mut aggregator = DailyAggregator::new();
    aggregator.extend(rows);
    let records = aggregator.finish();
    tracing::debug!(rows = rows.len(), groups = records.len(), "Aggregated daily sentiment");
    records
}

/// Records for one symbol in date order
pub fn for_symbol<'a>(records: &'a [DailySentimentRecord], symbol: &str) -> Vec<&'a DailySentimentRecord> {
    let mut selected: Vec<_> = records.iter().filter(|r| r.symbol == symbol).collect();
    selected.sort_by_key(|r| r.date);
    selected
}

impl ScoredRow {
    /// Build from a named-field row
    ///
    /// `idx` is the row position used in error reports. `compound` is
    /// optional and defaults to zero.
    pub fn from_row(idx: usize, row: &Row, columns: &InputColumns) -> Result<Self> {
        let number = |field: &str| {
            row.get(field)
                .and_then(Field::as_number)
                .ok_or_else(|| Error::missing_field(idx, field))
        };

        let date = row
            .get(&columns.date)
            .and_then(Field::as_date)
            .ok_or_else(|| Error::missing_field(idx, columns.date.as_str()))?;
        let symbol = row
            .get(&columns.symbol)
            .and_then(Field::as_text)
            .ok_or_else(|| Error::missing_field(idx, columns.symbol.as_str()))?;

        Ok(Self {
            date,
            symbol: symbol.to_string(),
            neg: number("neg")?,
            neu: number("neu")?,
            pos: number("pos")?,
            compound: row.get("compound").and_then(Field::as_number).unwrap_or(0.0),
        })
    }
}

/// Convert named-field rows into scored rows
pub fn scored_rows(rows: &[Row], columns: &InputColumns) -> Result<Vec<ScoredRow>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| ScoredRow::from_row(idx, row, columns))
        .collect()
}
