use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use headline_sentiment::analytics::checked_top_n;
use headline_sentiment::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "headline-sentiment",
    version,
    about = "Sentiment scoring, keyword extraction and daily aggregation for stock news headlines",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every headline and append neg/neu/pos/compound columns
    Score {
        /// Input CSV with a headline column
        input: PathBuf,

        /// Output file (.csv or .json); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also append the Sentiment label column
        #[arg(short, long, default_value = "false")]
        label: bool,
    },

    /// Print the most common headline keywords
    Keywords {
        /// Input CSV with a headline column
        input: PathBuf,

        /// Number of keywords to print
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        top_n: Option<i64>,
    },

    /// Average sentiment per date and stock symbol
    Daily {
        /// Input CSV with headline, date and stock columns
        input: PathBuf,

        /// Output file (.csv or .json); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only report this symbol
        #[arg(short, long)]
        symbol: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };
    config.apply_env()?;
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    config.validate()?;

    // Initialize tracing/logging
    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    tracing::info!("headline-sentiment starting");

    match cli.command {
        Commands::Score {
            input,
            output,
            label,
        } => {
            tracing::info!(
                input = %input.display(),
                output = ?output,
                label = %label,
                "Starting score command"
            );
            commands::score(
                &config,
                commands::ScoreParams {
                    input,
                    output,
                    label,
                },
            )?;
        }

        Commands::Keywords { input, top_n } => {
            let top_n = match top_n {
                Some(n) => checked_top_n(n)?,
                None => config.top_n()?,
            };
            tracing::info!(input = %input.display(), top_n = %top_n, "Starting keywords command");
            commands::keywords(&config, &input, top_n)?;
        }

        Commands::Daily {
            input,
            output,
            symbol,
        } => {
            tracing::info!(
                input = %input.display(),
                output = ?output,
                symbol = ?symbol,
                "Starting daily command"
            );
            commands::daily(
                &config,
                commands::DailyParams {
                    input,
                    output,
                    symbol,
                },
            )?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("headline_sentiment=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("headline_sentiment={level},warn")))
    };

    // stdout carries command output
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
