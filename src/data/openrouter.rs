use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::protocol::{BenchmarkCategory, BenchmarkModel, Provider};

pub const LIVE_CATEGORY_ID: &str = "openrouter-live";

/// Catalog ids must contain one of these to be considered at all.
const PROVIDER_SUBSTRINGS: [&str; 4] = ["openai", "anthropic", "google", "x-ai"];

/// The live catalog could not be used. Every variant means the same thing
/// to callers (data unavailable); the split only exists for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("model catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model catalog returned {0}")]
    Status(reqwest::StatusCode),
    #[error("model catalog body is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

// ── Wire types ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ModelListResponse {
    pub data: Vec<CatalogModel>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogModel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub context_length: Option<f64>,
    #[serde(default)]
    pub pricing: Option<CatalogPricing>,
}

/// USD per token, as decimal strings.
#[derive(Debug, Deserialize)]
pub struct CatalogPricing {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub completion: Option<String>,
}

// ── Fetch ───────────────────────────────────────────────────────────

pub async fn fetch_models(
    url: &str,
    limit: usize,
    timeout: Duration,
) -> Result<Vec<BenchmarkModel>, FetchError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client
        .get(url)
        .header("Content-Type", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().await?;
    let catalog: ModelListResponse = serde_json::from_str(&body)?;
    let total = catalog.data.len();
    let models = reshape(catalog, limit);

    info!("Model catalog returned {} entries, kept {}", total, models.len());
    Ok(models)
}

// ── Reshape ─────────────────────────────────────────────────────────

/// Maps catalog entries to leaderboard rows: provider filter, typed decode,
/// limit, then rank by output position.
pub fn reshape(catalog: ModelListResponse, limit: usize) -> Vec<BenchmarkModel> {
    catalog
        .data
        .into_iter()
        .filter(|m| PROVIDER_SUBSTRINGS.iter().any(|s| m.id.contains(s)))
        .filter_map(|m| {
            let id = m.id.clone();
            match decode_entry(m) {
                Ok(model) => Some(model),
                Err(reason) => {
                    debug!("Skipping catalog entry {}: {}", id, reason);
                    None
                }
            }
        })
        .take(limit)
        .enumerate()
        .map(|(index, model)| BenchmarkModel {
            rank: Some(index as u32 + 1),
            ..model
        })
        .collect()
}

fn decode_entry(entry: CatalogModel) -> Result<BenchmarkModel, String> {
    let slug = entry.id.split('/').next().unwrap_or_default();
    let provider =
        Provider::from_slug(slug).ok_or_else(|| format!("unknown provider prefix {:?}", slug))?;

    let context = entry
        .context_length
        .filter(|c| c.is_finite() && *c > 0.0)
        .ok_or_else(|| "missing context_length".to_string())?;

    let full_name = entry.name.unwrap_or_else(|| entry.id.clone());
    let name = full_name
        .split(": ")
        .nth(1)
        .filter(|s| !s.is_empty())
        .unwrap_or(&full_name)
        .to_string();

    let (input_price, output_price) = match &entry.pricing {
        Some(p) => (
            per_million(p.prompt.as_deref()),
            per_million(p.completion.as_deref()),
        ),
        None => (None, None),
    };

    Ok(BenchmarkModel {
        unit: Some(format!(" ctx ({})", format_context(context))),
        input_price,
        output_price,
        ..BenchmarkModel::new(name, provider, context)
    })
}

/// `1048576` -> `1M`, `2500000` -> `3M`, `128000` -> `128k`, `131072` -> `131.072k`.
pub fn format_context(context: f64) -> String {
    if context >= 1_000_000.0 {
        // Halves round away from zero.
        format!("{}M", (context / 1_000_000.0).round())
    } else {
        format!("{}k", context / 1000.0)
    }
}

/// Per-token USD string to $/1M tokens. Negative values mean "variable".
fn per_million(raw: Option<&str>) -> Option<f64> {
    let per_token: f64 = raw?.trim().parse().ok()?;
    if !per_token.is_finite() || per_token < 0.0 {
        return None;
    }
    Some((per_token * 1_000_000.0 * 10_000.0).round() / 10_000.0)
}

pub fn live_category(models: Vec<BenchmarkModel>) -> BenchmarkCategory {
    BenchmarkCategory {
        id: LIVE_CATEGORY_ID.to_string(),
        name: "Model Context (Live)".to_string(),
        description: "Real-time context window limits for the newest frontier models fetched directly via OpenRouter.".to_string(),
        models,
    }
}
