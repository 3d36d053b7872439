//! CLI module for Viser.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Viser - Video-Relevance Matching for Live Avatar Chat
///
/// Decides, from a live chat transcript, which pre-generated product video
/// an avatar persona should surface. The name "Viser" comes from the
/// Norwegian word for "shows" or "points to."
#[derive(Parser, Debug)]
#[command(name = "viser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VISER_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify whether a message is a product question
    Classify {
        /// The message to classify
        message: String,
    },

    /// Score catalog videos against a message and pick the best match
    Select {
        /// The message to match against the catalog
        message: String,

        /// Path to a JSON catalog file (defaults to the configured
        /// catalog, or the built-in demo catalog)
        #[arg(short = 'C', long)]
        catalog: Option<String>,

        /// Confidence floor for acting on the match (0.0-1.0)
        #[arg(short, long)]
        min_score: Option<f64>,
    },

    /// Replay a recorded transcript through a conversation session
    Replay {
        /// Path to a JSON transcript file (array of {speaker, text} turns)
        transcript: String,

        /// Path to a JSON catalog file
        #[arg(short = 'C', long)]
        catalog: Option<String>,

        /// Persona name whose turns trigger evaluation
        #[arg(short, long)]
        persona: Option<String>,

        /// Confidence floor for acting on a match (0.0-1.0)
        #[arg(short, long)]
        min_score: Option<f64>,
    },

    /// Start an interactive chat session against the catalog
    Chat {
        /// Path to a JSON catalog file
        #[arg(short = 'C', long)]
        catalog: Option<String>,

        /// Persona name for the simulated replies
        #[arg(short, long)]
        persona: Option<String>,

        /// Confidence floor for acting on a match (0.0-1.0)
        #[arg(short, long)]
        min_score: Option<f64>,
    },

    /// Start HTTP API server for integration with other systems
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
