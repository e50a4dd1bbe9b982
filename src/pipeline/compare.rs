// Group similarity pipeline.
//
// Concatenate every text into six per-group bags of words, vectorize the
// six bags as six documents (the vocabulary is built from exactly these
// six texts, separate from the classifier's), and read the pairwise
// cosine scores off the Gram matrix.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::corpus::loader::{load_press_releases, load_stream_tweets};
use crate::output::terminal;
use crate::similarity::groups::{GroupedCorpus, ALL_GROUPS};
use crate::similarity::matrix::SimilarityMatrix;
use crate::text::normalize::Normalizer;
use crate::text::readability;
use crate::text::tokenize::{StemmingTokenizer, StopWords};
use crate::vectorize::tfidf::{TfidfConfig, TfidfVectorizer};

/// Run the similarity analysis end to end.
///
/// Returns the number of pairwise comparisons printed.
pub fn run(press_path: &Path, tweets_path: &Path, with_readability: bool) -> Result<usize> {
    Config::require_file(press_path)?;
    Config::require_file(tweets_path)?;

    let mut corpus = GroupedCorpus::new();
    for record in load_press_releases(press_path)? {
        corpus.add_press_release(&record);
    }
    for record in load_stream_tweets(tweets_path)? {
        corpus.add_stream_tweet(&record);
    }
    if corpus.unknown_luminary_count > 0 {
        println!(
            "Skipped {} tweets naming a luminary outside this analysis",
            corpus.unknown_luminary_count
        );
    }

    terminal::display_group_lengths(&corpus);

    // A group with no text at all cannot be compared; fail loudly rather
    // than print zero scores that look like a finding.
    let empty = corpus.empty_groups();
    if !empty.is_empty() {
        let names: Vec<&str> = empty.iter().map(|g| g.label()).collect();
        anyhow::bail!(
            "No text collected for: {}. Every group needs at least one document.",
            names.join(", ")
        );
    }

    if with_readability {
        let scores: Vec<_> = ALL_GROUPS
            .into_iter()
            .map(|g| (g.label(), readability::score(corpus.bag(g))))
            .collect();
        terminal::display_readability(&scores);
    }

    // Lighter preprocessing than the classifier: lowercase and strip
    // punctuation, no placeholder substitution.
    let normalizer = Normalizer::for_similarity();
    let bags: Vec<String> = corpus
        .bags()
        .iter()
        .map(|bag| normalizer.normalize(bag))
        .collect();

    // Stemmed unigrams so inflected forms collapse before comparison.
    let tfidf_config = TfidfConfig::new(Box::new(StemmingTokenizer::new()), StopWords::english());
    let (vectorizer, vectors) = TfidfVectorizer::fit_transform(tfidf_config, &bags)?;
    if vectorizer.vocabulary_len() == 0 {
        anyhow::bail!(
            "TF-IDF vocabulary is empty — all six groups reduced to stop words. \
             Refusing to compare zero vectors."
        );
    }
    info!(
        vocabulary = vectorizer.vocabulary_len(),
        "Vectorized six speech groups"
    );

    let matrix = SimilarityMatrix::from_vectors(&vectors)?;
    terminal::display_similarity_scores(&matrix);

    Ok(crate::similarity::groups::COMPARISONS.len())
}
