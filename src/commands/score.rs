use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use headline_sentiment::config::Config;
use headline_sentiment::pipeline::{label_table, score_table};
use headline_sentiment::table::{load_csv, write_csv, write_json};

use super::{open_output, OutputFormat};

/// Parameters for the score command
#[derive(Debug, Clone)]
pub struct ScoreParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub label: bool,
}

pub fn score(config: &Config, params: ScoreParams) -> Result<()> {
    let mut table = load_csv(&params.input, &config.input)
        .with_context(|| format!("Failed to load headlines: {}", params.input.display()))?;

    let scorer = config.scorer().context("Failed to load sentiment lexicon")?;
    score_table(&mut table, &scorer, &config.input)?;

    if params.label {
        label_table(&mut table)?;
    }

    let mut writer = open_output(params.output.as_deref())?;
    match OutputFormat::for_path(params.output.as_deref()) {
        OutputFormat::Json => write_json(table.rows(), &mut writer)?,
        OutputFormat::Csv => write_csv(&table, &mut writer)?,
    }
    writer.flush()?;

    if let Some(output) = &params.output {
        tracing::info!(output = %output.display(), rows = table.len(), "Wrote scored headlines");
    }
    Ok(())
}
