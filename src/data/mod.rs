pub mod manifest;
pub mod openrouter;
pub mod tables;

use tracing::{error, info, warn};

use crate::config::Settings;
use crate::protocol::{BenchmarkCategory, BenchmarkModel, LoadStatus};
use manifest::CategoryManifest;

// ── Dataset ─────────────────────────────────────────────────────────

/// Every leaderboard known to the server, in tab order. Immutable once
/// built; a reload produces a new `Dataset`.
#[derive(Debug, Clone)]
pub struct Dataset {
    categories: Vec<BenchmarkCategory>,
    status: LoadStatus,
}

impl Dataset {
    pub fn new(categories: Vec<BenchmarkCategory>, status: LoadStatus) -> Self {
        Self { categories, status }
    }

    pub fn categories(&self) -> &[BenchmarkCategory] {
        &self.categories
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Looks up a category by id, falling back to the first category when
    /// the id is absent or stale. `None` only for an empty dataset.
    pub fn category(&self, id: Option<&str>) -> Option<&BenchmarkCategory> {
        id.and_then(|id| self.categories.iter().find(|c| c.id == id))
            .or_else(|| self.categories.first())
    }

    /// First model with this name across all categories.
    pub fn find_model(&self, name: &str) -> Option<&BenchmarkModel> {
        self.categories
            .iter()
            .flat_map(|c| c.models.iter())
            .find(|m| m.name == name)
    }

    pub fn contains_model(&self, name: &str) -> bool {
        self.find_model(name).is_some()
    }

    /// Appends a category, replacing any existing one with the same id so
    /// ids stay unique.
    fn upsert(&mut self, category: BenchmarkCategory) {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => {
                warn!("Category {} redefined, replacing earlier table", category.id);
                *existing = category;
            }
            None => self.categories.push(category),
        }
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// Builds the dataset: built-in tables, manifest extras, then the live
/// catalog. A failed live fetch drops that one tab and marks the dataset
/// unavailable; it never fails the load.
pub async fn load(settings: &Settings) -> Dataset {
    let mut dataset = Dataset::new(tables::builtin_categories(), LoadStatus::Ready);

    if let Some(path) = &settings.data_path {
        for category in CategoryManifest::load_from_file(path).categories {
            dataset.upsert(category);
        }
    }

    if settings.live_enabled {
        fetch_live(settings, &mut dataset).await;
    }

    info!(
        "Dataset loaded: {} categories, {} models",
        dataset.categories.len(),
        dataset.categories.iter().map(|c| c.models.len()).sum::<usize>()
    );
    dataset
}

async fn fetch_live(settings: &Settings, dataset: &mut Dataset) {
    match openrouter::fetch_models(
        &settings.openrouter_url,
        settings.live_limit,
        settings.fetch_timeout,
    )
    .await
    {
        Ok(models) if !models.is_empty() => {
            dataset.upsert(openrouter::live_category(models));
        }
        Ok(_) => {
            warn!("Model catalog returned no usable entries");
            dataset.status = LoadStatus::Unavailable {
                message: "Live model data is unavailable: the catalog returned no usable models."
                    .to_string(),
            };
        }
        Err(e) => {
            error!("Live model fetch failed: {}", e);
            dataset.status = LoadStatus::Unavailable {
                message: format!("Live model data is unavailable ({}).", e),
            };
        }
    }
}
