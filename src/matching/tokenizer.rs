//! Tokenization and term-frequency modeling.
//!
//! First stage of the matching pipeline: turns raw utterances and video
//! metadata into normalized term-frequency vectors.

use std::collections::HashMap;

/// Split text into normalized tokens.
///
/// Lower-cases the input, splits on runs of non-word characters (word =
/// ASCII letters, digits, underscore), and drops tokens of two characters
/// or fewer, which incidentally filters most English stop-words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| token.len() > 2)
        .map(str::to_string)
        .collect()
}

/// Raw occurrence count per token.
pub fn term_counts(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Normalized term-frequency vector: occurrence count divided by total
/// token count.
///
/// Frequencies sum to 1 for any non-empty token sequence. An empty
/// sequence yields an empty map, which callers must treat as "no
/// information" (it contributes 0 to similarity).
pub fn term_frequencies(tokens: &[String]) -> HashMap<String, f64> {
    let total = tokens.len() as f64;
    term_counts(tokens)
        .into_iter()
        .map(|(token, count)| (token, count as f64 / total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("Hello, World! This-is great");
        assert_eq!(tokens, vec!["hello", "world", "this", "great"]);
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        let tokens = tokenize("a to it the product is ok");
        assert_eq!(tokens, vec!["the", "product"]);
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscores() {
        let tokens = tokenize("model_v2 costs 100usd");
        assert_eq!(tokens, vec!["model_v2", "costs", "100usd"]);
    }

    #[test]
    fn test_tokenize_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?! -- ...").is_empty());
    }

    #[test]
    fn test_term_frequencies_sum_to_one() {
        let tokens = tokenize("ship ship ship fast fast now");
        let freqs = term_frequencies(&tokens);

        assert_eq!(freqs.len(), 3);
        assert!((freqs["ship"] - 0.5).abs() < 1e-9);
        assert!((freqs["fast"] - 1.0 / 3.0).abs() < 1e-9);

        let sum: f64 = freqs.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_term_frequencies_empty_input() {
        assert!(term_frequencies(&[]).is_empty());
    }
}
