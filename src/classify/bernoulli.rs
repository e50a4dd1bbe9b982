// Bernoulli-event naive Bayes.
//
// Each vocabulary term is a binary presence/absence feature: a term
// counts once per document no matter how often it repeats, and *absent*
// terms contribute evidence too. That absence term is what distinguishes
// the Bernoulli event model from the multinomial one, and it suits short
// texts where repetition is rare but word choice is telling.
//
// Training consumes the data and returns the fitted model; there is no
// refit path, so the same model scores both the held-out test partition
// and any later transfer set.

use anyhow::Result;
use tracing::info;

use crate::vectorize::SparseVector;

/// A fitted two-class Bernoulli naive Bayes model (labels 0 and 1).
pub struct BernoulliNb {
    class_log_prior: [f64; 2],
    /// Per feature, per class: ln(p) - ln(1-p), the score adjustment when
    /// the feature is present rather than absent.
    presence_delta: Vec<[f64; 2]>,
    /// Per class: sum over all features of ln(1-p), the log likelihood of
    /// a document containing nothing at all.
    all_absent_log_prob: [f64; 2],
    n_features: usize,
}

impl BernoulliNb {
    /// Train on feature vectors `x` with binary labels `y`, using Laplace
    /// smoothing `alpha` (1.0 is the standard choice).
    ///
    /// Both classes must be present in the training labels, otherwise the
    /// priors degenerate.
    pub fn train(x: &[SparseVector], y: &[u8], n_features: usize, alpha: f64) -> Result<Self> {
        if x.len() != y.len() {
            anyhow::bail!(
                "Feature/label length mismatch: {} vectors vs {} labels",
                x.len(),
                y.len()
            );
        }
        if x.is_empty() {
            anyhow::bail!("Cannot train a classifier on zero documents");
        }
        if n_features == 0 {
            anyhow::bail!("Cannot train a classifier over an empty vocabulary");
        }
        if let Some(bad) = y.iter().find(|&&label| label > 1) {
            anyhow::bail!("Labels must be 0 or 1, got {bad}");
        }
        if alpha <= 0.0 {
            anyhow::bail!("Smoothing alpha must be positive, got {alpha}");
        }

        let class_counts = [
            y.iter().filter(|&&label| label == 0).count(),
            y.iter().filter(|&&label| label == 1).count(),
        ];
        if class_counts[0] == 0 || class_counts[1] == 0 {
            anyhow::bail!("Training set must contain documents from both classes");
        }

        // Per class, how many documents contain each feature at least once.
        let mut presence_counts = vec![[0usize; 2]; n_features];
        for (vector, &label) in x.iter().zip(y) {
            for (index, _) in vector.iter() {
                if index < n_features {
                    presence_counts[index][label as usize] += 1;
                }
            }
        }

        let total = x.len() as f64;
        let class_log_prior = [
            (class_counts[0] as f64 / total).ln(),
            (class_counts[1] as f64 / total).ln(),
        ];

        let mut presence_delta = vec![[0.0; 2]; n_features];
        let mut all_absent_log_prob = [0.0; 2];
        for (feature, counts) in presence_counts.iter().enumerate() {
            for class in 0..2 {
                // Smoothed Bernoulli parameter: P(feature present | class).
                let p = (counts[class] as f64 + alpha)
                    / (class_counts[class] as f64 + 2.0 * alpha);
                presence_delta[feature][class] = p.ln() - (1.0 - p).ln();
                all_absent_log_prob[class] += (1.0 - p).ln();
            }
        }

        info!(
            documents = x.len(),
            features = n_features,
            class_0 = class_counts[0],
            class_1 = class_counts[1],
            "Trained Bernoulli naive Bayes"
        );

        Ok(Self {
            class_log_prior,
            presence_delta,
            all_absent_log_prob,
            n_features,
        })
    }

    /// Joint log likelihood of `vector` under each class.
    fn joint_log_likelihood(&self, vector: &SparseVector) -> [f64; 2] {
        let mut jll = [
            self.class_log_prior[0] + self.all_absent_log_prob[0],
            self.class_log_prior[1] + self.all_absent_log_prob[1],
        ];
        for (index, _) in vector.iter() {
            // Features beyond the training vocabulary carry no evidence.
            if index < self.n_features {
                jll[0] += self.presence_delta[index][0];
                jll[1] += self.presence_delta[index][1];
            }
        }
        jll
    }

    /// Predict hard labels.
    pub fn predict(&self, x: &[SparseVector]) -> Vec<u8> {
        x.iter()
            .map(|v| {
                let jll = self.joint_log_likelihood(v);
                u8::from(jll[1] > jll[0])
            })
            .collect()
    }

    /// Predict P(class = 1) for each vector. Always in [0, 1].
    pub fn predict_proba(&self, x: &[SparseVector]) -> Vec<f64> {
        x.iter()
            .map(|v| {
                let jll = self.joint_log_likelihood(v);
                // Normalizing the two joint likelihoods reduces to a
                // logistic over their difference, which is numerically
                // safe for any magnitude of log likelihood.
                1.0 / (1.0 + (jll[0] - jll[1]).exp())
            })
            .collect()
    }
}
