//! Tests for config module

mod common;

use common::{temp_file, FIXTURE_LEXICON};
use headline_sentiment::config::Config;
use headline_sentiment::error::{Error, ErrorCategory};
use headline_sentiment::table::InputColumns;

#[test]
fn test_config_file_with_all_sections() {
    let lexicon = temp_file(".txt", FIXTURE_LEXICON);
    let stopwords = temp_file(".txt", "acme\nquarter\n");
    let toml = format!(
        r#"
[input]
headline = "title"
date = "published"
symbol = "ticker"

[analysis]
top_n = 5
lexicon_path = "{}"
stopwords_path = "{}"

[logging]
level = "debug"
format = "json"
"#,
        lexicon.path().display(),
        stopwords.path().display()
    );
    let file = temp_file(".toml", &toml);

    let config = Config::from_file(file.path()).unwrap();
    config.validate().unwrap();

    assert_eq!(config.input.headline, "title");
    assert_eq!(config.top_n().unwrap(), 5);
    assert_eq!(config.logging.format, "json");

    let scorer = config.scorer().unwrap();
    assert_eq!(scorer.score("not good").compound, -0.3412);

    let stopwords = config.stopwords().unwrap();
    assert!(stopwords.contains("acme"));
    assert!(!stopwords.contains("the"));
}

#[test]
fn test_empty_config_file_uses_defaults() {
    let file = temp_file(".toml", "");
    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.input, InputColumns::default());
}

#[test]
fn test_malformed_config_file() {
    let file = temp_file(".toml", "[analysis\ntop_n = ");
    let err = Config::from_file(file.path()).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert_eq!(err.category(), ErrorCategory::Config);
}

#[test]
fn test_missing_lexicon_file() {
    let mut config = Config::default();
    config.analysis.lexicon_path = Some("no/such/vader_lexicon.txt".into());
    assert!(config.scorer().is_err());
}

#[test]
fn test_invalid_lexicon_line_is_reported() {
    let lexicon = temp_file(".txt", "good\t1.9\nbad\tterrible\n");
    let mut config = Config::default();
    config.analysis.lexicon_path = Some(lexicon.path().to_path_buf());

    let err = config.scorer().unwrap_err();
    assert!(matches!(err, Error::Lexicon { line: 2, .. }));
}

#[test]
fn test_environment_overrides() {
    std::env::set_var("HEADLINE_SENTIMENT_TOP_N", "3");
    std::env::set_var("HEADLINE_SENTIMENT_SYMBOL_COLUMN", "ticker");

    let config = Config::from_env().unwrap();
    assert_eq!(config.top_n().unwrap(), 3);
    assert_eq!(config.input.symbol, "ticker");

    std::env::set_var("HEADLINE_SENTIMENT_TOP_N", "many");
    assert!(Config::from_env().is_err());

    std::env::remove_var("HEADLINE_SENTIMENT_TOP_N");
    std::env::remove_var("HEADLINE_SENTIMENT_SYMBOL_COLUMN");
}
