// Line-delimited JSON corpus readers.
//
// One JSON record per line, parsed strictly: an unreadable file or a
// malformed line aborts the run with file/line context. Records that
// parse but fall outside the analysis (unrecognized author status,
// unknown luminary) are filtered, not errors, and the filter count is
// returned so the pipelines can report it instead of dropping silently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::corpus::document::{AuthorRole, Document};

/// `tweet_text.json` record: a tweet pre-labeled with its author's role.
#[derive(Debug, Deserialize)]
pub struct LabeledTweetRecord {
    pub author_status: String,
    pub text: String,
}

/// `press_releases.json` record.
#[derive(Debug, Deserialize)]
pub struct PressReleaseRecord {
    pub author: String,
    pub text: String,
}

/// `tweets3.json` record: a raw stream tweet, optionally tagged with the
/// luminary the collecting crawl was following.
#[derive(Debug, Deserialize)]
pub struct StreamTweetRecord {
    pub luminary_followed: Option<String>,
    pub user: StreamTweetUser,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct StreamTweetUser {
    pub screen_name: String,
}

/// Read every line of `path` and parse each as a `T`.
fn read_records<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open corpus file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("Failed to read {} line {}", path.display(), line_number + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(&line).with_context(|| {
            format!(
                "Malformed JSON record at {} line {}",
                path.display(),
                line_number + 1
            )
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Load labeled tweets, mapping `author_status` to an [`AuthorRole`].
///
/// Returns the surviving documents in file order plus the count of
/// records dropped for carrying an unrecognized status.
pub fn load_labeled_tweets(path: &Path) -> Result<(Vec<Document>, usize)> {
    let records: Vec<LabeledTweetRecord> = read_records(path)?;
    let total = records.len();

    let documents: Vec<Document> = records
        .into_iter()
        .filter_map(|r| {
            AuthorRole::from_status(&r.author_status).map(|role| Document { text: r.text, role })
        })
        .collect();

    let dropped = total - documents.len();
    info!(
        file = %path.display(),
        loaded = documents.len(),
        dropped,
        "Loaded labeled tweets"
    );
    Ok((documents, dropped))
}

/// Load press releases in file order.
pub fn load_press_releases(path: &Path) -> Result<Vec<PressReleaseRecord>> {
    let records = read_records(path)?;
    info!(file = %path.display(), loaded = records.len(), "Loaded press releases");
    Ok(records)
}

/// Load raw stream tweets in file order.
pub fn load_stream_tweets(path: &Path) -> Result<Vec<StreamTweetRecord>> {
    let records = read_records(path)?;
    info!(file = %path.display(), loaded = records.len(), "Loaded stream tweets");
    Ok(records)
}
