// Readability diagnostics — Flesch reading ease, Flesch-Kincaid grade,
// and Gunning fog, computed over a raw text block.
//
// These are corpus-level diagnostics, not classifier features: they are
// printed alongside the similarity report when requested, and never join
// the TF-IDF feature matrix.

/// Readability scores for one text block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadabilityScores {
    /// Flesch reading ease: higher = easier. Typical English prose lands
    /// between 0 and 100; short punchy tweets score high.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid grade level: approximate US school grade.
    pub flesch_kincaid_grade: f64,
    /// Gunning fog index: years of education needed on first reading.
    pub gunning_fog: f64,
}

impl ReadabilityScores {
    const ZERO: ReadabilityScores = ReadabilityScores {
        flesch_reading_ease: 0.0,
        flesch_kincaid_grade: 0.0,
        gunning_fog: 0.0,
    };
}

/// Compute all three readability scores for `text`.
///
/// Empty input (or input with no words) yields all-zero scores rather
/// than dividing by zero.
pub fn score(text: &str) -> ReadabilityScores {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().any(|c| c.is_alphabetic()))
        .collect();
    if words.is_empty() {
        return ReadabilityScores::ZERO;
    }

    let sentences = count_sentences(text).max(1) as f64;
    let word_count = words.len() as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let complex_words = words.iter().filter(|w| count_syllables(w) >= 3).count();

    let words_per_sentence = word_count / sentences;
    let syllables_per_word = syllables as f64 / word_count;
    let complex_ratio = complex_words as f64 / word_count;

    ReadabilityScores {
        flesch_reading_ease: 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
        flesch_kincaid_grade: 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
        gunning_fog: 0.4 * (words_per_sentence + 100.0 * complex_ratio),
    }
}

/// Count sentence terminators; a trailing unterminated fragment counts
/// as one sentence.
fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_terminator = false;
    let mut seen_content_since_break = false;
    for c in text.chars() {
        if c == '.' || c == '!' || c == '?' {
            if !in_terminator && seen_content_since_break {
                count += 1;
                seen_content_since_break = false;
            }
            in_terminator = true;
        } else {
            in_terminator = false;
            if c.is_alphanumeric() {
                seen_content_since_break = true;
            }
        }
    }
    if seen_content_since_break {
        count += 1;
    }
    count
}

/// Heuristic syllable count: vowel groups, minus a silent trailing 'e',
/// floor of one per word.
fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().filter(|c| c.is_alphabetic()).collect();
    if chars.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups: usize = 0;
    let mut prev_vowel = false;
    for &c in &chars {
        let v = is_vowel(c);
        if v && !prev_vowel {
            groups += 1;
        }
        prev_vowel = v;
    }

    // Silent 'e': "make" is one syllable, not two.
    if chars.len() > 2 && chars[chars.len() - 1] == 'e' && !is_vowel(chars[chars.len() - 2]) {
        groups = groups.saturating_sub(1);
    }

    groups.max(1)
}
