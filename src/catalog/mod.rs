//! Video catalog loading and persistence.
//!
//! Candidate records normally live in the product backend; the CLI and the
//! demo server read them from a JSON file instead. The file format is a
//! plain JSON array of video records.

use crate::error::{Result, ViserError};
use crate::matching::VideoRecord;
use std::path::Path;
use tracing::debug;

/// An ordered set of candidate videos.
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: Vec<VideoRecord>,
}

impl VideoCatalog {
    /// Wrap an existing record list.
    pub fn new(videos: Vec<VideoRecord>) -> Self {
        Self { videos }
    }

    /// Load a catalog from a JSON array of records.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ViserError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        let videos: Vec<VideoRecord> = serde_json::from_str(&content).map_err(|e| {
            ViserError::Catalog(format!("invalid catalog {}: {}", path.display(), e))
        })?;
        debug!(count = videos.len(), path = %path.display(), "catalog loaded");
        Ok(Self { videos })
    }

    /// Save the catalog as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.videos)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The records, in selection order.
    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Consume the catalog into its record list.
    pub fn into_videos(self) -> Vec<VideoRecord> {
        self.videos
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// True when the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Built-in catalog for trying the interactive commands without a
    /// catalog file.
    ///
    /// Metadata is kept short on purpose: the similarity weighting
    /// dilutes scores as the combined text grows, and long descriptions
    /// push even good matches under the default display floor.
    pub fn demo() -> Self {
        Self::new(vec![
            VideoRecord::new("overview", "Product Overview")
                .with_keywords("product overview video"),
            VideoRecord::new("in-action", "In Action")
                .with_description("used in a real-world setting"),
            VideoRecord::new("pricing", "Pricing Plans")
                .with_description("how much it costs")
                .with_keywords("price cost buy"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let catalog = VideoCatalog::demo();
        catalog.save(&path).unwrap();

        let loaded = VideoCatalog::load(&path).unwrap();
        assert_eq!(loaded.len(), catalog.len());
        assert_eq!(loaded.videos()[0].id, "overview");
        assert_eq!(
            loaded.videos()[2].keywords.as_deref(),
            Some("price cost buy")
        );
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = VideoCatalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, ViserError::Catalog(_)));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = VideoCatalog::load(&path).unwrap_err();
        assert!(matches!(err, ViserError::Catalog(_)));
    }

    #[test]
    fn test_demo_catalog_is_usable() {
        let catalog = VideoCatalog::demo();
        assert!(!catalog.is_empty());
        for video in catalog.videos() {
            assert!(!video.searchable_text().is_empty());
        }
    }
}
