use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::protocol::BenchmarkCategory;

/// Extra leaderboards supplied as a JSON file next to the built-in tables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryManifest {
    pub categories: Vec<BenchmarkCategory>,
}

impl CategoryManifest {
    /// Load the manifest from a JSON file on disk.
    /// Falls back to an empty manifest if the file is missing or malformed.
    pub fn load_from_file(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No benchmark manifest at {}, using built-in tables only", path.display());
                return CategoryManifest::default();
            }
            Err(e) => {
                warn!(
                    "Failed to read benchmark manifest at {}: {}. Using empty manifest.",
                    path.display(),
                    e
                );
                return CategoryManifest::default();
            }
        };

        match serde_json::from_str::<CategoryManifest>(&contents) {
            Ok(manifest) => {
                info!(
                    "Loaded benchmark manifest with {} categories",
                    manifest.categories.len()
                );
                manifest
            }
            Err(e) => {
                warn!(
                    "Failed to parse benchmark manifest at {}: {}. Using empty manifest.",
                    path.display(),
                    e
                );
                CategoryManifest::default()
            }
        }
    }
}
