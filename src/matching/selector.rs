//! Relevance selection over candidate video records.

use super::similarity::similarity;
use super::VideoRecord;
use tracing::debug;

/// The winning candidate of a selection pass.
#[derive(Debug, Clone)]
pub struct RelevanceMatch {
    /// Position of the winner in the candidate slice.
    pub index: usize,
    /// The winning record.
    pub video: VideoRecord,
    /// Relevance score in `[0, 1]`.
    pub score: f64,
}

/// Per-candidate score, in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    /// Position in the candidate slice.
    pub index: usize,
    /// Similarity of the message to the candidate's searchable text.
    pub score: f64,
}

/// Pick the candidate video whose metadata best matches `message`.
///
/// Returns `None` for an empty candidate list. A single candidate is
/// returned with score 1 without scoring: when there is only one video it
/// is always the one to show. Otherwise every candidate's combined
/// searchable text is scored against the message and the strictly highest
/// score wins, with the earliest candidate keeping ties. A winning score
/// of exactly 0 means no candidate shares anything with the message, so
/// nothing is selected.
///
/// The score reported here is a confidence, not a decision: callers own
/// whatever display threshold they want to apply on top.
pub fn find_relevant_video(message: &str, videos: &[VideoRecord]) -> Option<RelevanceMatch> {
    if videos.is_empty() {
        return None;
    }

    if videos.len() == 1 {
        return Some(RelevanceMatch {
            index: 0,
            video: videos[0].clone(),
            score: 1.0,
        });
    }

    let mut best_index = 0;
    let mut best_score = 0.0_f64;

    for (index, video) in videos.iter().enumerate() {
        let score = similarity(message, &video.searchable_text());
        debug!(video_id = %video.id, score, "scored candidate");
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    if best_score == 0.0 {
        return None;
    }

    Some(RelevanceMatch {
        index: best_index,
        video: videos[best_index].clone(),
        score: best_score,
    })
}

/// Score every candidate against the message, in input order.
///
/// Display helper for ranked output; unlike [`find_relevant_video`] it has
/// no single-candidate short-circuit and filters nothing.
pub fn score_candidates(message: &str, videos: &[VideoRecord]) -> Vec<ScoredCandidate> {
    videos
        .iter()
        .enumerate()
        .map(|(index, video)| ScoredCandidate {
            index,
            score: similarity(message, &video.searchable_text()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<VideoRecord> {
        vec![
            VideoRecord::new("a", "Product Overview").with_keywords("overview features"),
            VideoRecord::new("b", "In Action").with_description("used in a real-world setting"),
        ]
    }

    #[test]
    fn test_empty_candidate_list() {
        assert!(find_relevant_video("anything at all", &[]).is_none());
    }

    #[test]
    fn test_single_candidate_always_selected() {
        let videos = vec![VideoRecord::new("only", "The Only Video")];

        let matched = find_relevant_video("completely unrelated message", &videos).unwrap();
        assert_eq!(matched.index, 0);
        assert_eq!(matched.video.id, "only");
        assert_eq!(matched.score, 1.0);

        // Even an empty message gets the lone candidate.
        let matched = find_relevant_video("", &videos).unwrap();
        assert_eq!(matched.score, 1.0);
    }

    #[test]
    fn test_no_overlap_yields_no_selection() {
        let videos = catalog();
        assert!(find_relevant_video("zebra quagga okapi", &videos).is_none());
    }

    #[test]
    fn test_best_candidate_wins() {
        let videos = catalog();
        let matched = find_relevant_video("show the product overview features", &videos).unwrap();
        assert_eq!(matched.index, 0);
        assert_eq!(matched.video.id, "a");
        assert!(matched.score > 0.0);
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let videos = vec![
            VideoRecord::new("first", "identical metadata text"),
            VideoRecord::new("second", "identical metadata text"),
        ];
        let matched = find_relevant_video("identical metadata", &videos).unwrap();
        assert_eq!(matched.index, 0);
        assert_eq!(matched.video.id, "first");
    }

    #[test]
    fn test_real_world_usage_regression() {
        // Fixes relative ordering: the in-action video shares "real",
        // "world" (and nothing else) with the message, while the overview
        // video shares no qualifying token at all.
        let videos = catalog();
        let message = "How does this work in real-world use?";

        let scores = score_candidates(message, &videos);
        assert_eq!(scores[0].score, 0.0);
        assert!(scores[1].score > scores[0].score);

        let matched = find_relevant_video(message, &videos).unwrap();
        assert_eq!(matched.video.id, "b");
    }

    #[test]
    fn test_missing_optional_fields_are_empty() {
        let videos = vec![
            VideoRecord::new("bare", "Warranty Coverage"),
            VideoRecord::new("full", "Something Else")
                .with_description("totally different topic")
                .with_keywords("unrelated tags"),
        ];
        let matched = find_relevant_video("what warranty coverage applies", &videos).unwrap();
        assert_eq!(matched.video.id, "bare");
    }

    #[test]
    fn test_score_candidates_preserves_order() {
        let videos = catalog();
        let scores = score_candidates("overview of real-world use", &videos);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].index, 0);
        assert_eq!(scores[1].index, 1);
    }
}
