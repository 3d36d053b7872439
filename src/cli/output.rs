//! CLI output formatting utilities.

use console::style;

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(msg: &str) {
        println!("  {} {}", style("*").cyan(), msg);
    }

    /// Print one scored catalog candidate.
    pub fn scored_candidate(index: usize, title: &str, id: &str, score: f64, winner: bool) {
        let marker = if winner {
            style("=>").green().bold()
        } else {
            style("  ").dim()
        };
        println!(
            "{} [{}] {} ({}) score {:.3}",
            marker,
            index,
            style(title).bold(),
            style(id).dim(),
            score
        );
    }

    /// Print a video switch signal.
    pub fn video_switch(index: usize, title: &str, score: f64) {
        println!(
            "{} switch to [{}] {} (score {:.3})",
            style(">>").magenta().bold(),
            index,
            style(title).bold(),
            score
        );
    }
}
