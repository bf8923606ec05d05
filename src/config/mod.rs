//! Configuration management for headline-sentiment
//!
//! Settings come from a TOML file or from environment variables layered
//! over the defaults. Every section is optional in the file.

use crate::analytics::checked_top_n;
use crate::error::{Error, Result};
use crate::lexicon::StopwordSet;
use crate::sentiment::{LexiconModel, SentimentScorer};
use crate::table::InputColumns;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input column names
    pub input: InputColumns,

    /// Analysis settings
    pub analysis: AnalysisConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Analysis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of keywords to report
    pub top_n: i64,

    /// Lexicon file in VADER layout; the bundled VADER lexicon when unset
    pub lexicon_path: Option<PathBuf>,

    /// One-word-per-line stopword file; NLTK English when unset
    pub stopwords_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 20,
            lexicon_path: None,
            stopwords_path: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `HEADLINE_SENTIMENT_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        let var = |name: &str| std::env::var(format!("HEADLINE_SENTIMENT_{name}")).ok();

        if let Some(top_n) = var("TOP_N") {
            self.analysis.top_n = top_n
                .parse()
                .map_err(|_| Error::config(format!("HEADLINE_SENTIMENT_TOP_N is not an integer: {top_n}")))?;
        }
        if let Some(path) = var("LEXICON") {
            self.analysis.lexicon_path = Some(PathBuf::from(path));
        }
        if let Some(path) = var("STOPWORDS") {
            self.analysis.stopwords_path = Some(PathBuf::from(path));
        }
        if let Some(column) = var("HEADLINE_COLUMN") {
            self.input.headline = column;
        }
        if let Some(column) = var("DATE_COLUMN") {
            self.input.date = column;
        }
        if let Some(column) = var("SYMBOL_COLUMN") {
            self.input.symbol = column;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        checked_top_n(self.analysis.top_n)?;

        for (name, column) in [
            ("headline", &self.input.headline),
            ("date", &self.input.date),
            ("symbol", &self.input.symbol),
        ] {
            if column.trim().is_empty() {
                return Err(Error::config(format!("{name} column name must not be empty")));
            }
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(Error::config(format!(
                "log format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Validated keyword count
    pub fn top_n(&self) -> Result<usize> {
        checked_top_n(self.analysis.top_n)
    }

    /// Scorer for the configured lexicon
    pub fn scorer(&self) -> Result<SentimentScorer> {
        match &self.analysis.lexicon_path {
            Some(path) => Ok(SentimentScorer::new(LexiconModel::from_file(path)?)),
            None => Ok(SentimentScorer::default()),
        }
    }

    /// Stopwords for the configured file, or the shared English list
    pub fn stopwords(&self) -> Result<Cow<'static, StopwordSet>> {
        match &self.analysis.stopwords_path {
            Some(path) => Ok(Cow::Owned(StopwordSet::from_file(path)?)),
            None => Ok(Cow::Borrowed(StopwordSet::english())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.top_n().unwrap(), 20);
        assert_eq!(config.input.symbol, "stock");
    }

    #[test]
    fn test_negative_top_n_rejected() {
        let mut config = Config::default();
        config.analysis.top_n = -3;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidRange { value: -3, .. })
        ));
    }

    #[test]
    fn test_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("[analysis]\ntop_n = 5\n").unwrap();
        assert_eq!(config.analysis.top_n, 5);
        assert_eq!(config.input, InputColumns::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_stopwords_are_shared() {
        let config = Config::default();
        assert!(matches!(config.stopwords().unwrap(), Cow::Borrowed(_)));
    }
}
