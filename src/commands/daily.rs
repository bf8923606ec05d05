use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use headline_sentiment::analytics::for_symbol;
use headline_sentiment::config::Config;
use headline_sentiment::pipeline::{score_table, table_daily};
use headline_sentiment::table::{load_csv, write_json, write_records_csv};

use super::{has_score_columns, open_output, OutputFormat};

/// Parameters for the daily command
#[derive(Debug, Clone)]
pub struct DailyParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub symbol: Option<String>,
}

pub fn daily(config: &Config, params: DailyParams) -> Result<()> {
    let mut table = load_csv(&params.input, &config.input)
        .with_context(|| format!("Failed to load headlines: {}", params.input.display()))?;

    // Inputs exported by `score` already carry the score columns
    if !has_score_columns(&table) {
        let scorer = config.scorer().context("Failed to load sentiment lexicon")?;
        score_table(&mut table, &scorer, &config.input)?;
    }

    let mut records = table_daily(&table, &config.input)?;
    if let Some(symbol) = &params.symbol {
        records = for_symbol(&records, symbol).into_iter().cloned().collect();
        if records.is_empty() {
            tracing::warn!(symbol = %symbol, "No headlines for symbol");
        }
    }

    let mut writer = open_output(params.output.as_deref())?;
    match OutputFormat::for_path(params.output.as_deref()) {
        OutputFormat::Json => write_json(&records, &mut writer)?,
        OutputFormat::Csv => write_records_csv(&records, &mut writer)?,
    }
    writer.flush()?;

    Ok(())
}
