//! Replay command implementation.
//!
//! Runs a recorded transcript through a conversation session and prints
//! every video switch the policy would have fired.

use super::resolve_catalog;
use crate::cli::Output;
use crate::config::Settings;
use crate::error::ViserError;
use crate::session::{ConversationSession, TranscriptTurn};
use anyhow::Result;
use console::style;
use std::path::PathBuf;

/// Run the replay command.
pub fn run_replay(
    transcript: &str,
    catalog: Option<&str>,
    persona: Option<String>,
    min_score: Option<f64>,
    settings: Settings,
) -> Result<()> {
    let path = PathBuf::from(transcript);
    let content = std::fs::read_to_string(&path).map_err(|e| {
        ViserError::InvalidInput(format!("cannot read transcript {}: {}", path.display(), e))
    })?;
    let turns: Vec<TranscriptTurn> = serde_json::from_str(&content).map_err(|e| {
        ViserError::InvalidInput(format!("invalid transcript {}: {}", path.display(), e))
    })?;

    let catalog = resolve_catalog(catalog, &settings)?;
    let persona = persona.unwrap_or_else(|| settings.persona.name.clone());
    let min_score = min_score.unwrap_or(settings.matching.min_score);

    Output::header("Replay");
    Output::kv("Transcript", &path.display().to_string());
    Output::kv("Persona", &persona);
    Output::kv("Videos", &catalog.len().to_string());
    Output::kv("Floor", &format!("{:.2}", min_score));
    println!();

    let mut session =
        ConversationSession::new(persona, catalog.into_videos()).with_min_score(min_score);
    let mut switches = 0usize;

    for turn in &turns {
        println!(
            "{} {}",
            style(format!("{}:", turn.speaker)).bold(),
            turn.text
        );
        if let Some(switch) = session.observe_turn(turn) {
            Output::video_switch(switch.index, &switch.title, switch.score);
            switches += 1;
        }
    }

    println!();
    Output::success(&format!(
        "{} turns replayed, {} video switch(es).",
        turns.len(),
        switches
    ));
    if let Some(video) = session.active_video() {
        Output::kv("Final video", &format!("{} ({})", video.title, video.id));
    } else {
        Output::kv("Final video", "none");
    }

    Ok(())
}
