// Evaluation metrics: prediction-error count, F1, and ROC/AUC.
//
// The ROC sweep walks probability thresholds from high to low, so the
// curve always starts at (0, 0), nothing flagged positive, and ends at
// (1, 1), everything flagged positive.

use anyhow::Result;

/// One operating point on a ROC curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocPoint {
    pub fpr: f64,
    pub tpr: f64,
    /// The probability threshold producing this point; `f64::INFINITY`
    /// for the (0, 0) anchor.
    pub threshold: f64,
}

/// A full ROC curve, in threshold-descending order.
#[derive(Debug, Clone)]
pub struct RocCurve {
    pub points: Vec<RocPoint>,
}

impl RocCurve {
    /// Area under the curve via the trapezoid rule.
    pub fn auc(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].fpr - w[0].fpr) * (w[0].tpr + w[1].tpr) / 2.0)
            .sum()
    }
}

/// Compute the ROC curve for binary labels and class-1 scores.
///
/// Both classes must be present in `y_true`; with only one class either
/// rate would be 0/0.
pub fn roc_curve(y_true: &[u8], scores: &[f64]) -> Result<RocCurve> {
    if y_true.len() != scores.len() {
        anyhow::bail!(
            "Label/score length mismatch: {} labels vs {} scores",
            y_true.len(),
            scores.len()
        );
    }
    let positives = y_true.iter().filter(|&&y| y == 1).count();
    let negatives = y_true.len() - positives;
    if positives == 0 || negatives == 0 {
        anyhow::bail!("ROC curve requires both classes in the evaluation labels");
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut points = vec![RocPoint {
        fpr: 0.0,
        tpr: 0.0,
        threshold: f64::INFINITY,
    }];
    let (mut tp, mut fp) = (0usize, 0usize);
    let mut i = 0;
    while i < order.len() {
        let threshold = scores[order[i]];
        // Consume every example tied at this threshold before emitting a
        // point, so ties produce a single operating point.
        while i < order.len() && scores[order[i]] == threshold {
            if y_true[order[i]] == 1 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        points.push(RocPoint {
            fpr: fp as f64 / negatives as f64,
            tpr: tp as f64 / positives as f64,
            threshold,
        });
    }

    Ok(RocCurve { points })
}

/// Count of test examples where the hard prediction differs from the
/// label (for binary labels this equals the sum of |predicted - actual|).
pub fn prediction_error(y_true: &[u8], y_pred: &[u8]) -> usize {
    y_true
        .iter()
        .zip(y_pred)
        .filter(|(truth, pred)| truth != pred)
        .count()
}

/// F1 score for the positive class (label 1). Returns 0.0 when there are
/// no true positives and nothing was predicted positive.
pub fn f1_score(y_true: &[u8], y_pred: &[u8]) -> f64 {
    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;
    for (&truth, &pred) in y_true.iter().zip(y_pred) {
        match (truth, pred) {
            (1, 1) => tp += 1,
            (0, 1) => fp += 1,
            (1, 0) => fn_ += 1,
            _ => {}
        }
    }
    let denominator = 2 * tp + fp + fn_;
    if denominator == 0 {
        return 0.0;
    }
    2.0 * tp as f64 / denominator as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roc_endpoints() {
        let curve = roc_curve(&[0, 0, 1, 1], &[0.1, 0.4, 0.35, 0.8]).unwrap();
        let first = curve.points.first().unwrap();
        let last = curve.points.last().unwrap();
        assert_eq!((first.fpr, first.tpr), (0.0, 0.0));
        assert_eq!((last.fpr, last.tpr), (1.0, 1.0));
    }

    #[test]
    fn test_roc_known_curve() {
        let curve = roc_curve(&[0, 0, 1, 1], &[0.1, 0.4, 0.35, 0.8]).unwrap();
        let coords: Vec<(f64, f64)> = curve.points.iter().map(|p| (p.fpr, p.tpr)).collect();
        assert_eq!(
            coords,
            vec![(0.0, 0.0), (0.0, 0.5), (0.5, 0.5), (0.5, 1.0), (1.0, 1.0)]
        );
        assert!((curve.auc() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_classifier_auc_one() {
        let curve = roc_curve(&[0, 0, 1, 1], &[0.1, 0.2, 0.8, 0.9]).unwrap();
        assert!((curve.auc() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_classifier_auc_zero() {
        let curve = roc_curve(&[1, 1, 0, 0], &[0.1, 0.2, 0.8, 0.9]).unwrap();
        assert!(curve.auc().abs() < 1e-12);
    }

    #[test]
    fn test_tied_scores_single_point() {
        let curve = roc_curve(&[0, 1, 0, 1], &[0.5, 0.5, 0.5, 0.5]).unwrap();
        // Anchor plus one point consuming every tied example.
        assert_eq!(curve.points.len(), 2);
        assert!((curve.auc() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_roc_single_class_fails() {
        assert!(roc_curve(&[1, 1], &[0.1, 0.9]).is_err());
        assert!(roc_curve(&[0, 0], &[0.1, 0.9]).is_err());
    }

    #[test]
    fn test_roc_length_mismatch_fails() {
        assert!(roc_curve(&[0, 1], &[0.5]).is_err());
    }

    #[test]
    fn test_prediction_error_counts_mismatches() {
        assert_eq!(prediction_error(&[0, 1, 1, 0], &[0, 1, 0, 1]), 2);
        assert_eq!(prediction_error(&[0, 1], &[0, 1]), 0);
    }

    #[test]
    fn test_f1_hand_computed() {
        // tp=1, fp=0, fn=1 -> precision 1.0, recall 0.5, f1 = 2/3.
        let f1 = f1_score(&[1, 1, 0, 0], &[1, 0, 0, 0]);
        assert!((f1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_f1_perfect() {
        assert!((f1_score(&[1, 0, 1], &[1, 0, 1]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_f1_no_positives_anywhere() {
        assert_eq!(f1_score(&[0, 0], &[0, 0]), 0.0);
    }

    #[test]
    fn test_f1_in_unit_interval() {
        let f1 = f1_score(&[1, 0, 1, 0, 1], &[0, 1, 1, 0, 1]);
        assert!((0.0..=1.0).contains(&f1));
    }
}
