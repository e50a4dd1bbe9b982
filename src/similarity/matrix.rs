// Pairwise similarity as a Gram matrix.
//
// The vectorizer L2-normalizes every transformed row, so each dot
// product here is a true cosine similarity in [0, 1]: entry (i, i) is
// 1.0 for any nonzero vector, and the matrix is symmetric by
// construction. (With unnormalized vectors these would be raw dot
// products; the normalization is what makes the diagonal meaningful.)

use anyhow::Result;

use crate::vectorize::SparseVector;

/// A square symmetric matrix of pairwise cosine similarities.
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the Gram matrix of `vectors` (dot product of the vector
    /// set with its own transpose).
    pub fn from_vectors(vectors: &[SparseVector]) -> Result<Self> {
        if vectors.is_empty() {
            anyhow::bail!("Cannot build a similarity matrix from zero vectors");
        }
        let size = vectors.len();
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            for j in i..size {
                let score = vectors[i].dot(&vectors[j]);
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }
        Ok(Self { size, values })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity between rows `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "matrix index out of bounds");
        self.values[i * self.size + j]
    }
}
