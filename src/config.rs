use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

pub const DEFAULT_WS_ADDR: &str = "127.0.0.1:9001";
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:9002";
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/models";
pub const DEFAULT_LIVE_LIMIT: usize = 15;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Settings {
    pub ws_addr: String,
    pub http_addr: String,
    pub openrouter_url: String,
    pub live_enabled: bool,
    pub live_limit: usize,
    pub fetch_timeout: Duration,
    /// Optional manifest of extra benchmark tables.
    pub data_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ws_addr: DEFAULT_WS_ADDR.to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            openrouter_url: DEFAULT_OPENROUTER_URL.to_string(),
            live_enabled: true,
            live_limit: DEFAULT_LIVE_LIMIT,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            data_path: default_data_path(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
    }

    /// Builds settings from an arbitrary key lookup so tests don't touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Settings::default();

        let live_enabled = match lookup("BENCHMARKS_OFFLINE") {
            Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
            None => true,
        };
        if !live_enabled {
            info!("BENCHMARKS_OFFLINE set, live model catalog disabled");
        }

        Self {
            ws_addr: lookup("BENCHMARKS_WS_ADDR").unwrap_or(defaults.ws_addr),
            http_addr: lookup("BENCHMARKS_HTTP_ADDR").unwrap_or(defaults.http_addr),
            openrouter_url: lookup("OPENROUTER_MODELS_URL").unwrap_or(defaults.openrouter_url),
            live_enabled,
            live_limit: parse_or("BENCHMARKS_LIVE_LIMIT", &lookup, defaults.live_limit),
            fetch_timeout: Duration::from_secs(parse_or(
                "BENCHMARKS_FETCH_TIMEOUT_SECS",
                &lookup,
                DEFAULT_FETCH_TIMEOUT_SECS,
            )),
            data_path: lookup("BENCHMARKS_DATA")
                .map(PathBuf::from)
                .or(defaults.data_path),
        }
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                warn!("Invalid {}={:?}, using default {}", key, raw, default);
                default
            }
        },
    }
}

fn default_data_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("benchmarks-ai").join("benchmarks.json"))
}
