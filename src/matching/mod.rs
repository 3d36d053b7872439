//! Video-relevance matching engine.
//!
//! Given a live chat utterance and a set of candidate product videos,
//! decides which video to surface. Four pieces: a tokenizer and
//! term-frequency model, a weighted cosine similarity scorer, a relevance
//! selector over candidate records, and a cheap product-question gate that
//! decides whether selection should run at all.
//!
//! Every function here is pure, synchronous, and total: malformed input
//! degrades to a zero score or "no selection", never an error. The engine
//! holds no cache or index across calls, so any number of sessions may
//! call into it concurrently without coordination.

pub mod classifier;
pub mod selector;
pub mod similarity;
pub mod tokenizer;

pub use classifier::{is_product_question, ClassifierVerdict, QuestionClassifier};
pub use selector::{find_relevant_video, score_candidates, RelevanceMatch, ScoredCandidate};
pub use similarity::similarity;

use serde::{Deserialize, Serialize};

/// A candidate product video with searchable metadata.
///
/// Records are supplied by the caller; the engine never persists or
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Opaque unique identifier.
    pub id: String,
    /// Short human-readable label.
    pub title: String,
    /// Optional free-text summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional free-text tag string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl VideoRecord {
    /// Create a record with only an id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            keywords: None,
        }
    }

    /// Attach a free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a free-text tag string.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Combined searchable text: non-empty title, description, and
    /// keywords, space-joined, in that order.
    ///
    /// Recomputed on every call; nothing is cached that could go stale if
    /// a record field is edited between calls.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if !self.title.is_empty() {
            parts.push(&self.title);
        }
        if let Some(description) = self.description.as_deref() {
            if !description.is_empty() {
                parts.push(description);
            }
        }
        if let Some(keywords) = self.keywords.as_deref() {
            if !keywords.is_empty() {
                parts.push(keywords);
            }
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searchable_text_joins_in_order() {
        let video = VideoRecord::new("v1", "Product Overview")
            .with_description("a quick tour")
            .with_keywords("overview tour");
        assert_eq!(video.searchable_text(), "Product Overview a quick tour overview tour");
    }

    #[test]
    fn test_searchable_text_skips_empty_fields() {
        let video = VideoRecord::new("v2", "Just a Title");
        assert_eq!(video.searchable_text(), "Just a Title");

        let video = VideoRecord::new("v3", "Titled")
            .with_description("")
            .with_keywords("tags here");
        assert_eq!(video.searchable_text(), "Titled tags here");

        let video = VideoRecord::new("v4", "").with_keywords("only tags");
        assert_eq!(video.searchable_text(), "only tags");
    }

    #[test]
    fn test_record_deserializes_without_optionals() {
        let video: VideoRecord =
            serde_json::from_str(r#"{"id": "x", "title": "Bare"}"#).unwrap();
        assert_eq!(video.id, "x");
        assert!(video.description.is_none());
        assert!(video.keywords.is_none());
    }
}
