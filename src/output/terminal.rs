// Colored terminal output for the classification and similarity reports.
//
// This module handles all terminal-specific formatting: colors, tables,
// the ROC plot. The pipeline modules compute, then delegate here.

use colored::Colorize;

use crate::classify::metrics::RocCurve;
use crate::similarity::groups::{GroupedCorpus, ALL_GROUPS, COMPARISONS};
use crate::similarity::matrix::SimilarityMatrix;
use crate::text::readability::ReadabilityScores;

/// Dataset sizes for the classification run.
pub fn display_classification_sizes(
    primary: usize,
    followers: usize,
    dropped: usize,
    train: usize,
    test: usize,
) {
    println!("\n{}", "=== Dataset ===".bold());
    println!("  Labeled tweets (Trump/Bernie):   {primary}");
    println!("  Follower tweets (held out):      {followers}");
    if dropped > 0 {
        println!(
            "  {}",
            format!("Dropped (unrecognized status):   {dropped}").yellow()
        );
    }
    println!("  Training partition:              {train}");
    println!("  Test partition:                  {test}");
}

/// Test-partition results: error count out of the partition size.
pub fn display_test_metrics(test_size: usize, error_count: usize) {
    println!("\n{}", "=== Test partition ===".bold());
    println!("  Predictions:      {test_size}");
    let rate = if test_size > 0 {
        error_count as f64 / test_size as f64
    } else {
        0.0
    };
    let line = format!("  Prediction error: {error_count} ({:.1}%)", rate * 100.0);
    if rate <= 0.2 {
        println!("{}", line.green());
    } else {
        println!("{}", line.yellow());
    }
}

/// Transfer results on the held-out follower set.
pub fn display_transfer_metrics(follower_count: usize, f1: f64) {
    println!("\n{}", "=== Follower transfer evaluation ===".bold());
    println!("  Follower tweets scored: {follower_count}");
    println!("  F1 score:               {f1:.3}");
    println!(
        "  {}",
        "Model trained on the figures' own tweets, never refit.".dimmed()
    );
}

const PLOT_WIDTH: usize = 41;
const PLOT_HEIGHT: usize = 11;

/// Render a ROC curve as a terminal plot with the chance diagonal dashed
/// in, plus the AUC.
pub fn display_roc(title: &str, curve: &RocCurve) {
    println!("\n{}", format!("=== {title} ===").bold());
    println!("  AUC: {:.3}", curve.auc());

    let mut grid = vec![[' '; PLOT_WIDTH]; PLOT_HEIGHT];

    // Chance diagonal from (0,0) to (1,1).
    for col in 0..PLOT_WIDTH {
        let row = PLOT_HEIGHT - 1 - col * (PLOT_HEIGHT - 1) / (PLOT_WIDTH - 1);
        grid[row][col] = '.';
    }

    for point in &curve.points {
        let col = (point.fpr * (PLOT_WIDTH - 1) as f64).round() as usize;
        let row = PLOT_HEIGHT - 1 - (point.tpr * (PLOT_HEIGHT - 1) as f64).round() as usize;
        grid[row][col] = '#';
    }

    for (i, row) in grid.iter().enumerate() {
        let axis_label = match i {
            0 => "1.0",
            _ if i == PLOT_HEIGHT - 1 => "0.0",
            _ => "   ",
        };
        let line: String = row.iter().collect();
        println!("  {} |{}", axis_label.dimmed(), line);
    }
    println!("      +{}", "-".repeat(PLOT_WIDTH).dimmed());
    println!(
        "       {}{}{}",
        "0.0".dimmed(),
        " ".repeat(PLOT_WIDTH.saturating_sub(20)),
        "fpr            1.0".dimmed()
    );
}

/// Per-group character-length diagnostics for the similarity run.
pub fn display_group_lengths(corpus: &GroupedCorpus) {
    println!("\n{}", "=== Corpus sizes (characters) ===".bold());
    for group in ALL_GROUPS {
        println!("  {:<24} {:>10}", group.label(), corpus.bag(group).len());
    }
    if corpus.unknown_luminary_count > 0 {
        println!(
            "  {}",
            format!(
                "Skipped (unknown luminary):      {}",
                corpus.unknown_luminary_count
            )
            .yellow()
        );
    }
}

/// The seven named pairwise comparisons.
pub fn display_similarity_scores(matrix: &SimilarityMatrix) {
    println!("\n{}", "=== Pairwise cosine similarity ===".bold());
    for (a, b, description) in COMPARISONS {
        let score = matrix.get(a.index(), b.index());
        let bar = similarity_bar(score);
        println!("  {description:<40} {score:.4}  {bar}");
    }
}

/// A small bar visualizing a [0, 1] score.
fn similarity_bar(score: f64) -> String {
    let width = 16usize;
    let filled = (score.clamp(0.0, 1.0) * width as f64).round() as usize;
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(width - filled));
    if score >= 0.75 {
        bar.bright_green().to_string()
    } else if score >= 0.4 {
        bar.bright_yellow().to_string()
    } else {
        bar.bright_blue().to_string()
    }
}

/// Per-group readability diagnostics (opt-in via --readability).
pub fn display_readability(scores: &[(&'static str, ReadabilityScores)]) {
    println!("\n{}", "=== Readability diagnostics ===".bold());
    println!(
        "  {:<24} {:>8} {:>8} {:>8}",
        "Group".dimmed(),
        "Flesch".dimmed(),
        "F-K".dimmed(),
        "Fog".dimmed()
    );
    for (label, s) in scores {
        println!(
            "  {:<24} {:>8.1} {:>8.1} {:>8.1}",
            label, s.flesch_reading_ease, s.flesch_kincaid_grade, s.gunning_fog
        );
    }
    println!(
        "  {}",
        "Diagnostics only; these never join the feature matrix.".dimmed()
    );
}
