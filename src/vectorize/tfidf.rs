// TF-IDF vectorizer with a pluggable tokenizer, a configured stop-word
// exclusion set, and an n-gram range.
//
// Fitting consumes a TfidfConfig and returns the fitted vectorizer, so the
// vocabulary is frozen by construction: there is no refit path, and every
// later transform (including held-out follower text) is scored against the
// vocabulary built at fit time. Out-of-vocabulary terms are silently
// dropped on transform.

use std::collections::HashMap;

use anyhow::Result;
use tracing::info;

use crate::text::tokenize::{StopWords, Tokenize};
use crate::vectorize::SparseVector;

/// Configuration for one vectorizer, built once per pipeline.
pub struct TfidfConfig {
    pub tokenizer: Box<dyn Tokenize>,
    pub stop_words: StopWords,
    /// Inclusive n-gram range; `(1, 1)` = unigrams only, `(1, 2)` adds bigrams.
    pub ngram_range: (usize, usize),
}

impl TfidfConfig {
    pub fn new(tokenizer: Box<dyn Tokenize>, stop_words: StopWords) -> Self {
        Self {
            tokenizer,
            stop_words,
            ngram_range: (1, 1),
        }
    }

    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }
}

/// A fitted TF-IDF vectorizer: frozen vocabulary plus per-term IDF weights.
pub struct TfidfVectorizer {
    config: TfidfConfig,
    /// term -> column index, assigned in first-occurrence order.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per column.
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Build the vocabulary and IDF weights from `corpus`.
    ///
    /// Term indices follow first-occurrence order over the corpus, so the
    /// vector layout is deterministic for a given input order. Fitting an
    /// empty corpus is an error; a corpus whose every document is entirely
    /// stop words yields an empty vocabulary (callers decide whether that
    /// is fatal; see `vocabulary_len`).
    pub fn fit(config: TfidfConfig, corpus: &[String]) -> Result<Self> {
        if corpus.is_empty() {
            anyhow::bail!("Cannot fit a TF-IDF vocabulary on an empty corpus");
        }
        if config.ngram_range.0 == 0 || config.ngram_range.0 > config.ngram_range.1 {
            anyhow::bail!(
                "Invalid n-gram range ({}, {})",
                config.ngram_range.0,
                config.ngram_range.1
            );
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for doc in corpus {
            let mut seen_in_doc: Vec<bool> = vec![false; vocabulary.len()];
            for term in analyze(&config, doc) {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(term).or_insert(next_index);
                if index == next_index {
                    document_frequency.push(0);
                    seen_in_doc.push(false);
                }
                if !seen_in_doc[index] {
                    seen_in_doc[index] = true;
                    document_frequency[index] += 1;
                }
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. The +1 terms keep the
        // computation finite for every df, including the degenerate
        // empty-vocabulary case.
        let n = corpus.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        info!(
            documents = corpus.len(),
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vocabulary"
        );

        Ok(Self {
            config,
            vocabulary,
            idf,
        })
    }

    /// Fit on `corpus` and immediately transform it.
    pub fn fit_transform(config: TfidfConfig, corpus: &[String]) -> Result<(Self, Vec<SparseVector>)> {
        let fitted = Self::fit(config, corpus)?;
        let vectors = fitted.transform(corpus);
        Ok((fitted, vectors))
    }

    /// Transform documents into L2-normalized TF-IDF vectors over the
    /// frozen vocabulary.
    ///
    /// Each entry is term-frequency x IDF, and each row is scaled to unit
    /// L2 norm, so dot products between transformed vectors are cosine
    /// similarities. Documents containing only out-of-vocabulary terms map
    /// to the zero vector.
    pub fn transform(&self, docs: &[String]) -> Vec<SparseVector> {
        docs.iter().map(|doc| self.transform_one(doc)).collect()
    }

    fn transform_one(&self, doc: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in analyze(&self.config, doc) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }
        let mut vector = SparseVector::from_pairs(
            counts
                .into_iter()
                .map(|(index, tf)| (index, tf * self.idf[index]))
                .collect(),
        );
        vector.l2_normalize();
        vector
    }

    /// Number of terms in the frozen vocabulary. Zero means every fitted
    /// document was entirely stop words; downstream analyses must treat
    /// that as a hard failure rather than compare zero vectors.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// The IDF weight for a term, if it is in the vocabulary.
    pub fn idf_for(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }
}

/// Tokenize, drop stop words, and emit n-grams (joined by a single space)
/// over the surviving token stream.
fn analyze(config: &TfidfConfig, doc: &str) -> Vec<String> {
    let tokens: Vec<String> = config
        .tokenizer
        .tokenize(doc)
        .into_iter()
        .filter(|t| !config.stop_words.contains(t))
        .collect();

    let (min_n, max_n) = config.ngram_range;
    if min_n == 1 && max_n == 1 {
        return tokens;
    }

    let mut terms = Vec::with_capacity(tokens.len() * (max_n - min_n + 1));
    for n in min_n..=max_n {
        if n == 1 {
            terms.extend(tokens.iter().cloned());
        } else if tokens.len() >= n {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
    }
    terms
}
