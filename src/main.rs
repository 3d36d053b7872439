//! Viser CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use viser::cli::{commands, Cli, Commands};
use viser::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("viser={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Classify { message } => {
            commands::run_classify(message)?;
        }

        Commands::Select {
            message,
            catalog,
            min_score,
        } => {
            commands::run_select(message, catalog.as_deref(), *min_score, settings)?;
        }

        Commands::Replay {
            transcript,
            catalog,
            persona,
            min_score,
        } => {
            commands::run_replay(
                transcript,
                catalog.as_deref(),
                persona.clone(),
                *min_score,
                settings,
            )?;
        }

        Commands::Chat {
            catalog,
            persona,
            min_score,
        } => {
            commands::run_chat(catalog.as_deref(), persona.clone(), *min_score, settings)?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(host, *port, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
