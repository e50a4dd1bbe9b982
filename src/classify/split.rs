// Deterministic train/test partitioning.
//
// The shuffle runs on a seeded StdRng so repeated runs over the same
// input produce the same partition and therefore identical metrics.
// Reproducibility is a requirement here, not a convenience.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::vectorize::SparseVector;

/// The two partitions produced by [`train_test_split`].
pub struct TrainTestSplit {
    pub train_x: Vec<SparseVector>,
    pub train_y: Vec<u8>,
    pub test_x: Vec<SparseVector>,
    pub test_y: Vec<u8>,
}

/// Shuffle-and-slice split: `test_fraction` of the rows (rounded, at
/// least one) go to the test partition, the rest to training.
pub fn train_test_split(
    x: &[SparseVector],
    y: &[u8],
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit> {
    if x.len() != y.len() {
        anyhow::bail!(
            "Feature/label length mismatch: {} vectors vs {} labels",
            x.len(),
            y.len()
        );
    }
    if x.len() < 2 {
        anyhow::bail!("Need at least 2 labeled documents to split, got {}", x.len());
    }
    if !(0.0..1.0).contains(&test_fraction) || test_fraction == 0.0 {
        anyhow::bail!("Test fraction must be in (0, 1), got {test_fraction}");
    }

    let mut indices: Vec<usize> = (0..x.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = ((x.len() as f64 * test_fraction).round() as usize).clamp(1, x.len() - 1);
    let (test_idx, train_idx) = indices.split_at(test_len);

    Ok(TrainTestSplit {
        train_x: train_idx.iter().map(|&i| x[i].clone()).collect(),
        train_y: train_idx.iter().map(|&i| y[i]).collect(),
        test_x: test_idx.iter().map(|&i| x[i].clone()).collect(),
        test_y: test_idx.iter().map(|&i| y[i]).collect(),
    })
}
