//! CLI command implementations.

mod chat;
mod classify;
mod config;
mod replay;
mod select;
mod serve;

pub use chat::run_chat;
pub use classify::run_classify;
pub use config::run_config;
pub use replay::run_replay;
pub use select::run_select;
pub use serve::run_serve;

use crate::catalog::VideoCatalog;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;
use std::path::PathBuf;

/// Resolve the catalog for a command: an explicit `--catalog` path, then
/// the configured catalog file, then the built-in demo catalog.
pub(crate) fn resolve_catalog(arg: Option<&str>, settings: &Settings) -> Result<VideoCatalog> {
    if let Some(path) = arg {
        let catalog = VideoCatalog::load(&PathBuf::from(path))?;
        return Ok(catalog);
    }

    let configured = settings.catalog_path();
    if configured.exists() {
        let catalog = VideoCatalog::load(&configured)?;
        return Ok(catalog);
    }

    Output::info("No catalog file found, using the built-in demo catalog.");
    Ok(VideoCatalog::demo())
}
