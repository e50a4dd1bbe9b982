// Authorship classification pipeline.
//
// Load labeled tweets, vectorize the two figures' own tweets (the
// vocabulary is fitted here and frozen), split deterministically, train
// a Bernoulli naive Bayes, and score the held-out test partition. Then
// the transfer question: the same fitted model, never refit, scores the
// follower tweets, which were excluded from training entirely. The
// follower text is transformed against the frozen Trump/Bernie
// vocabulary on purpose, so followers are measured in the figures' own
// vocabulary rather than their own.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::classify::bernoulli::BernoulliNb;
use crate::classify::metrics::{f1_score, prediction_error, roc_curve};
use crate::classify::split::train_test_split;
use crate::config::Config;
use crate::corpus::document::partition_by_role;
use crate::corpus::loader::load_labeled_tweets;
use crate::output::terminal;
use crate::text::normalize::Normalizer;
use crate::text::tokenize::{StopWords, WordTokenizer};
use crate::vectorize::tfidf::{TfidfConfig, TfidfVectorizer};

/// Laplace smoothing for the naive Bayes model.
const SMOOTHING_ALPHA: f64 = 1.0;

/// Run the classification analysis end to end.
///
/// Returns (primary document count, follower document count).
pub fn run(tweets_path: &Path, config: &Config) -> Result<(usize, usize)> {
    Config::require_file(tweets_path)?;

    let (documents, dropped) = load_labeled_tweets(tweets_path)?;
    let (primary, followers) = partition_by_role(documents);
    if dropped > 0 {
        println!("Dropped {dropped} records with unrecognized author status");
    }

    if primary.len() < 2 {
        anyhow::bail!(
            "Need at least 2 Trump/Bernie tweets to train, found {}",
            primary.len()
        );
    }

    // Normalize once, up front; the same Normalizer serves every
    // document in this pipeline.
    let normalizer = Normalizer::for_classification();
    let primary_texts: Vec<String> = primary.iter().map(|d| normalizer.normalize(&d.text)).collect();
    let primary_labels: Vec<u8> = primary.iter().map(|d| d.role.binary_label()).collect();

    // Unigrams + bigrams over unstemmed tokens, English stop words plus
    // the Twitter conventions.
    let tfidf_config = TfidfConfig::new(
        Box::new(WordTokenizer),
        StopWords::english_with_twitter_exclusions(),
    )
    .with_ngram_range(1, 2);

    let (vectorizer, vectors) = TfidfVectorizer::fit_transform(tfidf_config, &primary_texts)?;
    if vectorizer.vocabulary_len() == 0 {
        anyhow::bail!(
            "TF-IDF vocabulary is empty — every labeled tweet was stop words. \
             Refusing to train on zero features."
        );
    }
    info!(
        vocabulary = vectorizer.vocabulary_len(),
        "Vocabulary frozen for this run"
    );

    let split = train_test_split(&vectors, &primary_labels, config.test_fraction, config.seed)?;
    terminal::display_classification_sizes(
        primary.len(),
        followers.len(),
        dropped,
        split.train_x.len(),
        split.test_x.len(),
    );

    let model = BernoulliNb::train(
        &split.train_x,
        &split.train_y,
        vectorizer.vocabulary_len(),
        SMOOTHING_ALPHA,
    )?;

    // Test partition: hard labels for the error count, probabilities for
    // the ROC sweep.
    let test_pred = model.predict(&split.test_x);
    let errors = prediction_error(&split.test_y, &test_pred);
    terminal::display_test_metrics(split.test_y.len(), errors);

    let test_proba = model.predict_proba(&split.test_x);
    match roc_curve(&split.test_y, &test_proba) {
        Ok(curve) => terminal::display_roc("ROC curve (test partition)", &curve),
        Err(e) => println!("  (ROC unavailable: {e})"),
    }

    // Transfer evaluation: follower tweets, frozen vocabulary, same model.
    if followers.is_empty() {
        println!("\nNo follower tweets in the corpus; skipping transfer evaluation.");
        return Ok((primary.len(), 0));
    }

    let follower_texts: Vec<String> = followers
        .iter()
        .map(|d| normalizer.normalize(&d.text))
        .collect();
    let follower_labels: Vec<u8> = followers.iter().map(|d| d.role.binary_label()).collect();

    let follower_vectors = vectorizer.transform(&follower_texts);
    let follower_pred = model.predict(&follower_vectors);
    let f1 = f1_score(&follower_labels, &follower_pred);
    terminal::display_transfer_metrics(followers.len(), f1);

    let follower_proba = model.predict_proba(&follower_vectors);
    match roc_curve(&follower_labels, &follower_proba) {
        Ok(curve) => terminal::display_roc("ROC curve (follower transfer)", &curve),
        Err(e) => println!("  (ROC unavailable: {e})"),
    }

    Ok((primary.len(), followers.len()))
}
