//! Interactive chat command.
//!
//! Simulates a live avatar session in the terminal: every line you type is
//! a user turn, followed by a simulated persona reply, with the
//! classification verdict and any video switch shown inline.

use super::resolve_catalog;
use crate::cli::Output;
use crate::config::Settings;
use crate::matching::{ClassifierVerdict, QuestionClassifier};
use crate::session::{ConversationSession, TranscriptTurn};
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};

/// Run the interactive chat command.
pub fn run_chat(
    catalog: Option<&str>,
    persona: Option<String>,
    min_score: Option<f64>,
    settings: Settings,
) -> Result<()> {
    let catalog = resolve_catalog(catalog, &settings)?;
    let persona = persona.unwrap_or_else(|| settings.persona.name.clone());
    let min_score = min_score.unwrap_or(settings.matching.min_score);

    let classifier = QuestionClassifier::new();
    let mut session = ConversationSession::new(persona.clone(), catalog.into_videos())
        .with_min_score(min_score);

    println!("\n{}", style("Viser Chat").bold().cyan());
    println!(
        "{}\n",
        style("Type messages as the visitor, or 'exit' to quit. Use 'videos' to list the catalog.")
            .dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("videos") {
            for (index, video) in session.videos().iter().enumerate() {
                let active = session.active_index() == Some(index);
                let marker = if active { "(active)" } else { "" };
                Output::list_item(&format!("[{}] {} {}", index, video.title, marker));
            }
            continue;
        }

        let verdict = classifier.classify(input);
        match verdict {
            ClassifierVerdict::NotProduct => {
                println!("   {}", style(format!("({})", verdict)).dim());
            }
            _ => {
                println!(
                    "   {}",
                    style(format!("(product question: {})", verdict)).dim()
                );
            }
        }

        session.observe_turn(&TranscriptTurn::new("visitor", input));
        let reply = TranscriptTurn::new(persona.clone(), "Happy to help with that.");

        match session.observe_turn(&reply) {
            Some(switch) => {
                Output::video_switch(switch.index, &switch.title, switch.score);
            }
            None => {
                println!("   {}", style("(video unchanged)").dim());
            }
        }

        println!(
            "\n{} {}\n",
            style(format!("{}:", session.persona_name())).cyan().bold(),
            reply.text
        );
    }

    Ok(())
}
