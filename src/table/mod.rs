//! Tabular headline data: CSV loading and result writing
//!
//! Rows are keyed by column name. A [`Table`] keeps the column order so
//! results can be written back out with the source columns first and
//! derived columns appended.
//!
//! Empty CSV cells are left out of the row, so a blank `compound` cell is
//! reported the same way as a missing column.

use crate::error::{Error, Result};
use crate::models::SentimentLabel;
use crate::sentiment::categorizer::LABEL_FIELD;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::Path;

/// One cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl Field {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A row of named fields
pub type Row = BTreeMap<String, Field>;

/// Names of the columns the analysis reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputColumns {
    /// Raw headline text
    pub headline: String,

    /// Publication date or timestamp
    pub date: String,

    /// Ticker symbol
    pub symbol: String,
}

impl Default for InputColumns {
    fn default() -> Self {
        Self {
            headline: String::from("headline"),
            date: String::from("date"),
            symbol: String::from("stock"),
        }
    }
}

/// Ordered columns plus rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Register a column name if not already present
    pub fn add_column(&mut self, name: &str) {
        if !self.columns.iter().any(|c| c == name) {
            self.columns.push(name.to_string());
        }
    }

    /// Text of one column for every row
    pub fn texts(&self, column: &str) -> Result<Vec<&str>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                row.get(column)
                    .and_then(Field::as_text)
                    .ok_or_else(|| Error::missing_field(idx, column))
            })
            .collect()
    }
}

/// Parse a date cell
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS`
/// with or without a `±HH:MM` offset. Timestamps keep the calendar date
/// of their own offset.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%:z")
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Read a headline CSV with a header row
///
/// The headline and symbol columns stay text, the date column is parsed
/// with [`parse_date`], other cells become numbers when they parse as one.
/// A `Sentiment` column from an earlier labeling run must hold valid
/// labels and is normalized to their canonical spelling.
pub fn read_csv<R: io::Read>(reader: R, columns: &InputColumns) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut row = Row::new();

        for (name, cell) in headers.iter().zip(record.iter()) {
            if cell.is_empty() {
                continue;
            }

            let invalid = || Error::InvalidField {
                row: idx,
                field: name.clone(),
                value: cell.to_string(),
            };

            let field = if *name == columns.date {
                Field::Date(parse_date(cell).ok_or_else(invalid)?)
            } else if name == LABEL_FIELD {
                let label = SentimentLabel::parse(cell.trim()).ok_or_else(invalid)?;
                Field::Text(label.as_str().to_string())
            } else if *name == columns.headline || *name == columns.symbol {
                Field::Text(cell.to_string())
            } else {
                cell.trim()
                    .parse::<f64>()
                    .map(Field::Number)
                    .unwrap_or_else(|_| Field::Text(cell.to_string()))
            };

            row.insert(name.clone(), field);
        }

        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "Read CSV table");
    Ok(Table::new(headers, rows))
}

/// Load a headline CSV file
pub fn load_csv(path: &Path, columns: &InputColumns) -> Result<Table> {
    let file = std::fs::File::open(path)?;
    let table = read_csv(io::BufReader::new(file), columns)?;
    tracing::info!(path = %path.display(), rows = table.len(), "Loaded headlines");
    Ok(table)
}

/// Write a table as CSV in column order; absent fields are empty cells
pub fn write_csv<W: io::Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(table.columns())?;

    for row in table.rows() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|c| row.get(c).map(Field::to_string).unwrap_or_default())
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write flat serializable records as CSV with a header row
pub fn write_records_csv<T: Serialize, W: io::Write>(records: &[T], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write any serializable value as pretty JSON
pub fn write_json<T: Serialize + ?Sized, W: io::Write>(value: &T, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
