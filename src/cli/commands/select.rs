//! Select command implementation.

use super::resolve_catalog;
use crate::cli::Output;
use crate::config::Settings;
use crate::matching::{find_relevant_video, score_candidates};
use anyhow::Result;

/// Run the select command.
pub fn run_select(
    message: &str,
    catalog: Option<&str>,
    min_score: Option<f64>,
    settings: Settings,
) -> Result<()> {
    let catalog = resolve_catalog(catalog, &settings)?;
    let min_score = min_score.unwrap_or(settings.matching.min_score);

    if catalog.is_empty() {
        Output::warning("Catalog is empty, nothing to select from.");
        return Ok(());
    }

    let videos = catalog.videos();
    let matched = find_relevant_video(message, videos);
    let scores = score_candidates(message, videos);

    Output::header("Candidates");
    for scored in &scores {
        let video = &videos[scored.index];
        let winner = matched
            .as_ref()
            .is_some_and(|m| m.index == scored.index);
        Output::scored_candidate(scored.index, &video.title, &video.id, scored.score, winner);
    }
    println!();

    match matched {
        Some(m) if m.score > min_score => {
            Output::success(&format!(
                "Selected [{}] {} (score {:.3} > floor {:.2})",
                m.index, m.video.title, m.score, min_score
            ));
        }
        Some(m) => {
            Output::warning(&format!(
                "Best match [{}] {} scored {:.3}, below the {:.2} floor; no action.",
                m.index, m.video.title, m.score, min_score
            ));
        }
        None => {
            Output::warning("No candidate shares anything with the message.");
        }
    }

    Ok(())
}
