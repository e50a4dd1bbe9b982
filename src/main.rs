use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use rhetoric::config::Config;

/// Rhetoric: compare short-form political text from two public figures
/// and their followers.
///
/// Two batch analyses over static line-delimited JSON corpora: classify
/// authorship of individual tweets, or measure how similar whole groups
/// of text are to each other.
#[derive(Parser)]
#[command(name = "rhetoric", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a Trump-vs-Bernie tweet classifier and evaluate it on the
    /// figures' followers
    Classify {
        /// Labeled tweet corpus (default: <data dir>/tweet_text.json)
        #[arg(long)]
        tweets: Option<PathBuf>,

        /// Override the train/test shuffle seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the held-out test fraction
        #[arg(long)]
        test_fraction: Option<f64>,
    },

    /// Compare the six speech groups (press releases, own tweets,
    /// follower tweets) by pairwise cosine similarity
    Compare {
        /// Press release corpus (default: <data dir>/press_releases.json)
        #[arg(long)]
        press_releases: Option<PathBuf>,

        /// Stream tweet corpus (default: <data dir>/tweets3.json)
        #[arg(long)]
        tweets: Option<PathBuf>,

        /// Also print per-group readability diagnostics
        #[arg(long)]
        readability: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rhetoric=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            tweets,
            seed,
            test_fraction,
        } => {
            let mut config = Config::load()?;
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(fraction) = test_fraction {
                if !(0.0..1.0).contains(&fraction) || fraction == 0.0 {
                    anyhow::bail!("--test-fraction must be in (0, 1), got {fraction}");
                }
                config.test_fraction = fraction;
            }
            let tweets_path = tweets.unwrap_or_else(|| config.labeled_tweets_path());

            println!("Classifying authorship from {}...", tweets_path.display());

            let (primary, followers) = rhetoric::pipeline::classify::run(&tweets_path, &config)?;

            println!("\n{}", "Classification complete.".bold());
            println!("  Labeled tweets:  {primary}");
            println!("  Follower tweets: {followers}");
        }

        Commands::Compare {
            press_releases,
            tweets,
            readability,
        } => {
            let config = Config::load()?;
            let press_path = press_releases.unwrap_or_else(|| config.press_releases_path());
            let tweets_path = tweets.unwrap_or_else(|| config.stream_tweets_path());

            println!(
                "Comparing speech groups from {} and {}...",
                press_path.display(),
                tweets_path.display()
            );

            let comparisons =
                rhetoric::pipeline::compare::run(&press_path, &tweets_path, readability)?;

            println!("\n{}", "Comparison complete.".bold());
            println!("  Pairwise scores printed: {comparisons}");
        }
    }

    Ok(())
}
