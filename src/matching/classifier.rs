//! Heuristic product-question gate.
//!
//! Decides whether an utterance is asking about the product at all, before
//! the more expensive relevance selector runs. Pattern- and keyword-based;
//! false positives and negatives are expected and acceptable.

use regex::Regex;

/// Interrogative shapes that read as product questions.
const QUESTION_PATTERNS: &[&str] = &[
    r"how (does|do) (it|this|the|your) work",
    r"what (is|are) (the|your) (feature|benefit|advantage|spec)",
    r"tell me (about|more)",
    r"show me",
    r"can (it|this|the product) ",
    r"how much (does|is|will)",
    r"when (can|will)",
    r"where (can|should)",
    r"why (should|would)",
];

/// Product vocabulary, matched as substrings (not whole words).
const PRODUCT_KEYWORDS: &[&str] = &[
    "product",
    "service",
    "feature",
    "benefit",
    "advantage",
    "price",
    "cost",
    "quality",
    "performance",
    "specification",
    "detail",
    "work",
    "function",
    "use",
    "buy",
    "purchase",
    "order",
    "shipping",
    "warranty",
    "return",
    "refund",
    "model",
    "version",
    "compare",
    "difference",
    "similar",
    "alternative",
    "competitor",
    "review",
];

/// Which gate accepted (or rejected) a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierVerdict {
    /// A question pattern matched.
    Pattern,
    /// The message carries a `?` and at least one product keyword.
    QuestionMark,
    /// Two or more distinct product keywords appear.
    KeywordPair,
    /// Not product-related.
    NotProduct,
}

impl ClassifierVerdict {
    /// True for any accepting verdict.
    pub fn is_product_question(&self) -> bool {
        !matches!(self, ClassifierVerdict::NotProduct)
    }
}

impl std::fmt::Display for ClassifierVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierVerdict::Pattern => write!(f, "question pattern"),
            ClassifierVerdict::QuestionMark => write!(f, "question mark + keyword"),
            ClassifierVerdict::KeywordPair => write!(f, "two or more keywords"),
            ClassifierVerdict::NotProduct => write!(f, "not product-related"),
        }
    }
}

/// Product-question classifier with a fixed, compiled pattern set.
#[derive(Debug, Clone)]
pub struct QuestionClassifier {
    patterns: Vec<Regex>,
}

impl QuestionClassifier {
    /// Compile the fixed pattern list.
    pub fn new() -> Self {
        let patterns = QUESTION_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("static question pattern must compile"))
            .collect();
        Self { patterns }
    }

    /// True when the message reads as a question about the product.
    pub fn is_product_question(&self, message: &str) -> bool {
        self.classify(message).is_product_question()
    }

    /// Run the gates in order and report which one fired.
    ///
    /// Patterns are evaluated first, short-circuiting on the first match;
    /// then `?`-plus-keyword; then the distinct-keyword count.
    pub fn classify(&self, message: &str) -> ClassifierVerdict {
        let message = message.to_lowercase();

        if self.patterns.iter().any(|p| p.is_match(&message)) {
            return ClassifierVerdict::Pattern;
        }

        let keyword_hits = self.keyword_hits(&message);

        if message.contains('?') && keyword_hits >= 1 {
            return ClassifierVerdict::QuestionMark;
        }

        if keyword_hits >= 2 {
            return ClassifierVerdict::KeywordPair;
        }

        ClassifierVerdict::NotProduct
    }

    /// Distinct product keywords found as substrings of a lower-cased
    /// message.
    fn keyword_hits(&self, message: &str) -> usize {
        PRODUCT_KEYWORDS
            .iter()
            .filter(|keyword| message.contains(*keyword))
            .count()
    }
}

impl Default for QuestionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience over a freshly compiled classifier.
pub fn is_product_question(message: &str) -> bool {
    QuestionClassifier::new().is_product_question(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_pattern_matches() {
        let classifier = QuestionClassifier::new();
        assert!(classifier.is_product_question("How does it work?"));
        assert_eq!(
            classifier.classify("How does it work?"),
            ClassifierVerdict::Pattern
        );
    }

    #[test]
    fn test_pattern_sweep() {
        let classifier = QuestionClassifier::new();
        let samples = [
            "how does this work in practice",
            "what are your features like",
            "tell me more please",
            "show me what you have",
            "can it handle wet weather",
            "how much does this go for",
            "when will it arrive",
            "where can I try one",
            "why should anyone switch",
        ];
        for sample in samples {
            assert_eq!(
                classifier.classify(sample),
                ClassifierVerdict::Pattern,
                "expected pattern match for {:?}",
                sample
            );
        }
    }

    #[test]
    fn test_question_mark_with_one_keyword() {
        let classifier = QuestionClassifier::new();
        assert_eq!(
            classifier.classify("is shipping included?"),
            ClassifierVerdict::QuestionMark
        );
    }

    #[test]
    fn test_two_keywords_without_question_mark() {
        let classifier = QuestionClassifier::new();
        assert_eq!(
            classifier.classify("What is the price and warranty?"),
            ClassifierVerdict::QuestionMark
        );
        assert_eq!(
            classifier.classify("the price beats every competitor"),
            ClassifierVerdict::KeywordPair
        );
    }

    #[test]
    fn test_single_keyword_alone_is_not_enough() {
        let classifier = QuestionClassifier::new();
        assert_eq!(
            classifier.classify("the price seems fine"),
            ClassifierVerdict::NotProduct
        );
    }

    #[test]
    fn test_small_talk_is_rejected() {
        let classifier = QuestionClassifier::new();
        assert!(!classifier.is_product_question("Hello there"));
        assert!(!classifier.is_product_question("nice day"));
        assert!(!classifier.is_product_question(""));
    }

    #[test]
    fn test_substring_matching_is_intentional() {
        // "use" inside "house" counts; cheap gating beats precision here.
        let classifier = QuestionClassifier::new();
        assert_eq!(
            classifier.classify("is the house big?"),
            ClassifierVerdict::QuestionMark
        );
    }

    #[test]
    fn test_convenience_function() {
        assert!(is_product_question("tell me about the warranty"));
        assert!(!is_product_question("good morning"));
    }
}
