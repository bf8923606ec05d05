use anyhow::{Context, Result};
use std::path::Path;

use headline_sentiment::config::Config;
use headline_sentiment::pipeline::table_keywords;
use headline_sentiment::table::load_csv;

pub fn keywords(config: &Config, input: &Path, top_n: usize) -> Result<()> {
    let table = load_csv(input, &config.input)
        .with_context(|| format!("Failed to load headlines: {}", input.display()))?;
    let stopwords = config.stopwords().context("Failed to load stopwords")?;

    let keywords = table_keywords(&table, &config.input, &stopwords, top_n)?;

    println!("Most common keywords:");
    for keyword in &keywords {
        println!("{}: {}", keyword.token, keyword.count);
    }

    Ok(())
}
