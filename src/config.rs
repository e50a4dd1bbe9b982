use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI
/// flags override these values where a flag exists.
pub struct Config {
    /// Directory containing the corpus files (RHETORIC_DATA_DIR,
    /// default ./data).
    pub data_dir: PathBuf,
    /// Seed for the train/test shuffle (RHETORIC_SEED, default 42).
    pub seed: u64,
    /// Fraction of labeled documents held out for testing
    /// (RHETORIC_TEST_FRACTION, default 0.2).
    pub test_fraction: f64,
}

/// File names expected inside the data directory.
const LABELED_TWEETS_FILE: &str = "tweet_text.json";
const PRESS_RELEASES_FILE: &str = "press_releases.json";
const STREAM_TWEETS_FILE: &str = "tweets3.json";

impl Config {
    /// Load configuration from environment variables, applying defaults
    /// for anything unset.
    pub fn load() -> Result<Self> {
        let data_dir = env::var("RHETORIC_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let seed = match env::var("RHETORIC_SEED") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("RHETORIC_SEED must be an integer, got {raw:?}"))?,
            Err(_) => 42,
        };

        let test_fraction = match env::var("RHETORIC_TEST_FRACTION") {
            Ok(raw) => {
                let parsed: f64 = raw.parse().map_err(|_| {
                    anyhow::anyhow!("RHETORIC_TEST_FRACTION must be a number, got {raw:?}")
                })?;
                if !(0.0..1.0).contains(&parsed) || parsed == 0.0 {
                    anyhow::bail!("RHETORIC_TEST_FRACTION must be in (0, 1), got {parsed}");
                }
                parsed
            }
            Err(_) => 0.2,
        };

        Ok(Self {
            data_dir,
            seed,
            test_fraction,
        })
    }

    pub fn labeled_tweets_path(&self) -> PathBuf {
        self.data_dir.join(LABELED_TWEETS_FILE)
    }

    pub fn press_releases_path(&self) -> PathBuf {
        self.data_dir.join(PRESS_RELEASES_FILE)
    }

    pub fn stream_tweets_path(&self) -> PathBuf {
        self.data_dir.join(STREAM_TWEETS_FILE)
    }

    /// Check that a corpus file exists before a pipeline starts, so the
    /// failure message names the file and how to point elsewhere.
    pub fn require_file(path: &Path) -> Result<()> {
        if !path.is_file() {
            anyhow::bail!(
                "Corpus file not found: {}\n\
                 Set RHETORIC_DATA_DIR (or pass the file path flag) to the \
                 directory holding the line-delimited JSON corpora.",
                path.display()
            );
        }
        Ok(())
    }
}
