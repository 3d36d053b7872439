//! Viser - Video-Relevance Matching for Live Avatar Chat
//!
//! Decides, from a live chat transcript, which pre-generated product video
//! an avatar persona should surface.
//!
//! The name "Viser" comes from the Norwegian word for "shows" or "points
//! to."
//!
//! # Overview
//!
//! Viser allows you to:
//! - Classify whether an utterance is a product question worth reacting to
//! - Score candidate videos against an utterance and pick the best match
//! - Drive a per-session video-switch policy (confidence floor + trigger
//!   latch) over a transcript of turns
//! - Replay recorded transcripts, chat interactively, or serve the engine
//!   over HTTP
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `matching` - Tokenizer, similarity scorer, relevance selector, and
//!   product-question classifier
//! - `session` - Conversation session driver with the switch policy
//! - `catalog` - JSON catalog of candidate video records
//! - `cli` - Command-line interface and HTTP server
//!
//! # Example
//!
//! ```rust
//! use viser::matching::VideoRecord;
//! use viser::session::{ConversationSession, TranscriptTurn};
//!
//! let videos = vec![
//!     VideoRecord::new("overview", "Product Overview")
//!         .with_keywords("product overview video"),
//!     VideoRecord::new("pricing", "Pricing Plans")
//!         .with_description("how much it costs"),
//! ];
//!
//! let mut session = ConversationSession::new("Ava", videos);
//! session.observe_turn(&TranscriptTurn::new("visitor", "Product overview, show me!"));
//!
//! let switch = session
//!     .observe_turn(&TranscriptTurn::new("Ava", "Of course, here it is."))
//!     .expect("a product question above the floor switches the video");
//! assert_eq!(switch.video_id, "overview");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod session;

pub use error::{Result, ViserError};
