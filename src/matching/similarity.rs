//! Weighted cosine similarity between two texts.

use super::tokenizer::{term_counts, term_frequencies, tokenize};
use std::collections::HashSet;

/// Score how related two texts are, in `[0, 1]`.
///
/// Both texts are tokenized independently. Each token in the union of the
/// two vocabularies gets the heuristic weight
/// `1 + ln(1 + union_size / max(count_a, count_b, 1))`, and the score is
/// the cosine of the two weighted term-frequency vectors.
///
/// The weight is a deliberate simplification of inverse document
/// frequency: there is no corpus here beyond the two texts being compared,
/// so it discriminates far less than true IDF would. It is reproduced
/// exactly rather than replaced, since matching behavior is the contract.
///
/// Degenerate inputs (empty text, no qualifying tokens, zero-magnitude
/// vectors) score 0 rather than erroring.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let freq_a = term_frequencies(&tokens_a);
    let freq_b = term_frequencies(&tokens_b);
    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    let union: HashSet<&str> = freq_a
        .keys()
        .chain(freq_b.keys())
        .map(String::as_str)
        .collect();
    let union_size = union.len() as f64;

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;

    for token in union {
        let count_a = counts_a.get(token).copied().unwrap_or(0);
        let count_b = counts_b.get(token).copied().unwrap_or(0);
        // max(count_a, count_b, 1): the argument of ln stays >= 1.
        let dominant = count_a.max(count_b).max(1) as f64;
        let weight = 1.0 + (1.0 + union_size / dominant).ln();

        let fa = freq_a.get(token).copied().unwrap_or(0.0);
        let fb = freq_b.get(token).copied().unwrap_or(0.0);

        dot += fa * fb * weight;
        mag_a += (fa * weight) * (fa * weight);
        mag_b += (fb * weight) * (fb * weight);
    }

    let mag_a = mag_a.sqrt();
    let mag_b = mag_b.sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}
