pub mod daily;
pub mod keywords;
pub mod score;

// Re-export command functions for convenience
pub use daily::{daily, DailyParams};
pub use keywords::keywords;
pub use score::{score, ScoreParams};

use anyhow::{Context, Result};
use headline_sentiment::pipeline::SCORE_FIELDS;
use headline_sentiment::table::Table;
use std::io::{self, Write};
use std::path::Path;

/// Output format inferred from the output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn for_path(path: Option<&Path>) -> Self {
        match path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Open the output file, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// True when every neg/neu/pos/compound column is present
pub fn has_score_columns(table: &Table) -> bool {
    SCORE_FIELDS
        .iter()
        .all(|field| table.columns().iter().any(|c| c == field))
}
