// TF-IDF vectorization — turning token streams into comparable
// numeric vectors over a frozen vocabulary.

pub mod tfidf;

/// A sparse vector: `(index, weight)` pairs sorted by index, zeros omitted.
///
/// Vocabulary sizes run to tens of thousands of terms while a single tweet
/// touches a few dozen, so dense rows would be almost entirely zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from unsorted `(index, weight)` pairs. Zero weights are
    /// dropped; duplicate indices are summed.
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_by_key(|&(i, _)| i);
        let mut entries: Vec<(usize, f64)> = Vec::with_capacity(pairs.len());
        for (i, w) in pairs {
            match entries.last_mut() {
                Some((last_i, last_w)) if *last_i == i => *last_w += w,
                _ => entries.push((i, w)),
            }
        }
        entries.retain(|&(_, w)| w != 0.0);
        Self { entries }
    }

    pub fn zero() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of nonzero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Dot product via a merge walk over the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut sum = 0.0;
        let (mut a, mut b) = (0, 0);
        while a < self.entries.len() && b < other.entries.len() {
            let (ia, wa) = self.entries[a];
            let (ib, wb) = other.entries[b];
            match ia.cmp(&ib) {
                std::cmp::Ordering::Less => a += 1,
                std::cmp::Ordering::Greater => b += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    a += 1;
                    b += 1;
                }
            }
        }
        sum
    }

    pub fn l2_norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit L2 norm. A zero vector stays zero.
    pub fn l2_normalize(&mut self) {
        let norm = self.l2_norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}
