//! Conversation session driver.
//!
//! Accumulates `{speaker, text}` turns from a live avatar session and
//! decides when to switch the displayed video. The matching engine itself
//! is stateless; this module owns the per-session policy: the display
//! threshold and the once-per-turn trigger latch.

use crate::matching::{find_relevant_video, QuestionClassifier, VideoRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default display threshold: matches at or below this score are ignored.
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// One turn of a live session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTurn {
    /// Speaker label; the persona's own turns carry the persona name.
    pub speaker: String,
    /// What was said.
    pub text: String,
    /// When the turn was observed.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl TranscriptTurn {
    /// Create a turn stamped with the current time.
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Signal that the displayed video should change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSwitch {
    /// Index of the video in the session's candidate list.
    pub index: usize,
    /// Record id of the selected video.
    pub video_id: String,
    /// Title of the selected video.
    pub title: String,
    /// Relevance score that cleared the display threshold.
    pub score: f64,
}

/// Live conversation state for one avatar session.
///
/// Feed every transcript turn through [`observe_turn`]. A user turn
/// records the utterance and re-arms the trigger; a persona turn evaluates
/// the recorded utterance and fires at most one [`VideoSwitch`] per user
/// turn.
///
/// [`observe_turn`]: ConversationSession::observe_turn
#[derive(Debug)]
pub struct ConversationSession {
    persona_name: String,
    videos: Vec<VideoRecord>,
    classifier: QuestionClassifier,
    min_score: f64,
    last_user_message: Option<String>,
    trigger_fired: bool,
    active_video: Option<usize>,
}

impl ConversationSession {
    /// Create a session for a persona and its candidate videos.
    pub fn new(persona_name: impl Into<String>, videos: Vec<VideoRecord>) -> Self {
        Self {
            persona_name: persona_name.into(),
            videos,
            classifier: QuestionClassifier::new(),
            min_score: DEFAULT_MIN_SCORE,
            last_user_message: None,
            trigger_fired: false,
            active_video: None,
        }
    }

    /// Override the display threshold (strictly-greater-than comparison).
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// The persona this session belongs to.
    pub fn persona_name(&self) -> &str {
        &self.persona_name
    }

    /// The candidate videos, in selection order.
    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Index of the currently displayed video, if any switch has fired.
    pub fn active_index(&self) -> Option<usize> {
        self.active_video
    }

    /// The currently displayed video record, if any.
    pub fn active_video(&self) -> Option<&VideoRecord> {
        self.active_video.and_then(|index| self.videos.get(index))
    }

    /// The configured display threshold.
    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    /// Feed one transcript turn into the session.
    ///
    /// Returns a switch signal when a persona turn triggers a new video:
    /// the latch must be clear, the prior user message must classify as a
    /// product question, and the best match must score strictly above the
    /// display threshold.
    #[instrument(skip(self, turn), fields(speaker = %turn.speaker))]
    pub fn observe_turn(&mut self, turn: &TranscriptTurn) -> Option<VideoSwitch> {
        if turn.speaker != self.persona_name {
            // New user message: remember it and re-arm the trigger.
            self.last_user_message = Some(turn.text.clone());
            self.trigger_fired = false;
            return None;
        }

        if self.trigger_fired {
            debug!("trigger already fired for this user turn");
            return None;
        }

        let message = self.last_user_message.as_deref()?;
        if !self.classifier.is_product_question(message) {
            debug!("not a product question, selector skipped");
            return None;
        }

        let matched = find_relevant_video(message, &self.videos)?;
        if matched.score <= self.min_score {
            debug!(score = matched.score, "best match below display threshold");
            return None;
        }

        self.trigger_fired = true;
        self.active_video = Some(matched.index);
        info!(video_id = %matched.video.id, score = matched.score, "switching video");

        Some(VideoSwitch {
            index: matched.index,
            video_id: matched.video.id,
            title: matched.video.title,
            score: matched.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_videos() -> Vec<VideoRecord> {
        vec![
            VideoRecord::new("overview", "Product Overview")
                .with_keywords("product overview video"),
            VideoRecord::new("pricing", "Pricing Plans")
                .with_description("how much it costs"),
        ]
    }

    #[test]
    fn test_product_question_triggers_switch() {
        let mut session = ConversationSession::new("Ava", demo_videos());

        let none = session.observe_turn(&TranscriptTurn::new(
            "visitor",
            "Product overview, show me!",
        ));
        assert!(none.is_none());

        let switch = session
            .observe_turn(&TranscriptTurn::new("Ava", "Of course, here it is."))
            .expect("persona turn should trigger a switch");
        assert_eq!(switch.index, 0);
        assert_eq!(switch.video_id, "overview");
        assert!(switch.score > DEFAULT_MIN_SCORE);
        assert_eq!(session.active_index(), Some(0));
    }

    #[test]
    fn test_latch_blocks_second_switch_in_same_turn() {
        let mut session = ConversationSession::new("Ava", demo_videos());

        session.observe_turn(&TranscriptTurn::new(
            "visitor",
            "Product overview, show me!",
        ));
        assert!(session
            .observe_turn(&TranscriptTurn::new("Ava", "Sure."))
            .is_some());

        // Second persona turn for the same user message: latched.
        assert!(session
            .observe_turn(&TranscriptTurn::new("Ava", "Anything else?"))
            .is_none());
    }

    #[test]
    fn test_new_user_turn_rearms_the_trigger() {
        let mut session = ConversationSession::new("Ava", demo_videos());

        session.observe_turn(&TranscriptTurn::new(
            "visitor",
            "Product overview, show me!",
        ));
        assert!(session
            .observe_turn(&TranscriptTurn::new("Ava", "Sure."))
            .is_some());

        session.observe_turn(&TranscriptTurn::new(
            "visitor",
            "Product overview, show me!",
        ));
        assert!(session
            .observe_turn(&TranscriptTurn::new("Ava", "Again, gladly."))
            .is_some());
    }

    #[test]
    fn test_small_talk_does_not_switch() {
        let mut session = ConversationSession::new("Ava", demo_videos());

        session.observe_turn(&TranscriptTurn::new("visitor", "Hello there"));
        assert!(session
            .observe_turn(&TranscriptTurn::new("Ava", "Hi! How can I help?"))
            .is_none());
        assert!(session.active_video().is_none());
    }

    #[test]
    fn test_unrelated_question_does_not_switch() {
        let mut session = ConversationSession::new("Ava", demo_videos());

        // Product question, but it shares nothing with the catalog.
        session.observe_turn(&TranscriptTurn::new(
            "visitor",
            "why should anyone trust telescope reviews",
        ));
        assert!(session
            .observe_turn(&TranscriptTurn::new("Ava", "Good question."))
            .is_none());
    }

    #[test]
    fn test_persona_turn_without_user_message() {
        let mut session = ConversationSession::new("Ava", demo_videos());
        assert!(session
            .observe_turn(&TranscriptTurn::new("Ava", "Welcome!"))
            .is_none());
    }

    #[test]
    fn test_threshold_override() {
        let videos = vec![
            VideoRecord::new("a", "Product Overview").with_keywords("overview features"),
            VideoRecord::new("b", "In Action").with_description("used in a real-world setting"),
        ];
        // The real-world message scores well under 0.3 against this
        // catalog; a permissive threshold lets the switch through.
        let mut session = ConversationSession::new("Ava", videos).with_min_score(0.05);

        session.observe_turn(&TranscriptTurn::new(
            "visitor",
            "How does this work in real-world use?",
        ));
        let switch = session
            .observe_turn(&TranscriptTurn::new("Ava", "Let me show you."))
            .expect("permissive threshold should fire");
        assert_eq!(switch.video_id, "b");
    }
}
