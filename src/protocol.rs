use serde::{Deserialize, Serialize};

// ── Providers ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    OpenAI,
    Anthropic,
    Google,
    #[serde(rename = "xAI")]
    XAi,
}

impl Provider {
    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Provider::OpenAI => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Google => "Google",
            Provider::XAi => "xAI",
        }
    }

    /// Maps a model-catalog slug prefix (`openai/gpt-5` -> `openai`).
    pub fn from_slug(slug: &str) -> Option<Provider> {
        match slug {
            "openai" => Some(Provider::OpenAI),
            "anthropic" => Some(Provider::Anthropic),
            "google" => Some(Provider::Google),
            "x-ai" => Some(Provider::XAi),
            _ => None,
        }
    }
}

/// Provider selector; `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProviderFilter {
    #[default]
    All,
    Only(Provider),
}

impl ProviderFilter {
    pub fn matches(self, provider: Provider) -> bool {
        match self {
            ProviderFilter::All => true,
            ProviderFilter::Only(p) => p == provider,
        }
    }
}

// ── Benchmark data ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkModel {
    pub name: String,
    pub provider: Provider,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// e.g. speed in tokens/sec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_score: Option<f64>,
    /// e.g. blended price in $/1M tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary_score: Option<f64>,
    /// $/1M input tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_price: Option<f64>,
    /// $/1M output tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_price: Option<f64>,
}

impl BenchmarkModel {
    pub fn new(name: impl Into<String>, provider: Provider, score: f64) -> Self {
        Self {
            name: name.into(),
            provider,
            score,
            max_score: None,
            unit: None,
            rank: None,
            secondary_score: None,
            tertiary_score: None,
            input_price: None,
            output_price: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub models: Vec<BenchmarkModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadStatus {
    Ready,
    Unavailable { message: String },
}

// ── Sorting / view options ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Rank,
    Name,
    Provider,
    Score,
    MaxScore,
    SecondaryScore,
    TertiaryScore,
    InputPrice,
    OutputPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Table,
    Chart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartMetric {
    #[default]
    Score,
    SecondaryScore,
    TertiaryScore,
    InputPrice,
    OutputPrice,
}

impl ChartMetric {
    /// Lower is better. Only affects emphasis, never bar height.
    pub fn is_inverse(self) -> bool {
        matches!(
            self,
            ChartMetric::TertiaryScore | ChartMetric::InputPrice | ChartMetric::OutputPrice
        )
    }

    pub fn value(self, model: &BenchmarkModel) -> Option<f64> {
        match self {
            ChartMetric::Score => Some(model.score),
            ChartMetric::SecondaryScore => model.secondary_score,
            ChartMetric::TertiaryScore => model.tertiary_score,
            ChartMetric::InputPrice => model.input_price,
            ChartMetric::OutputPrice => model.output_price,
        }
    }
}

// ── Derived view (Server → Client) ─────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub model: BenchmarkModel,
    pub display_rank: u32,
    pub display_unit: String,
    pub percent_of_max: Option<f64>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RowSet {
    Rows { rows: Vec<Row> },
    NoMatches { search: String, provider: ProviderFilter },
}

impl RowSet {
    pub fn rows(&self) -> &[Row] {
        match self {
            RowSet::Rows { rows } => rows,
            RowSet::NoMatches { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedScore {
    pub category_id: String,
    pub category_name: String,
    pub unit: String,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub left: BenchmarkModel,
    pub right: BenchmarkModel,
    pub shared: Vec<SharedScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub name: String,
    pub provider: Provider,
    pub value: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub metric: ChartMetric,
    pub inverse: bool,
    pub best: Option<String>,
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTab {
    pub id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub status: LoadStatus,
    pub tabs: Vec<CategoryTab>,
    pub category_id: Option<String>,
    pub title: String,
    pub description: String,
    pub search: String,
    pub provider: ProviderFilter,
    pub sort: Option<SortSpec>,
    pub mode: ViewMode,
    pub rows: RowSet,
    pub selection: Vec<String>,
    pub comparison: Option<Comparison>,
    pub chart: Option<ChartSeries>,
}

// ── Client → Server messages ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewInput {
    SelectCategory { id: String },
    Search { query: String },
    SelectProvider { provider: ProviderFilter },
    SortBy { key: SortKey },
    ToggleCompare { name: String },
    ClearComparison,
    SetMode { mode: ViewMode },
    SetChartMetric { metric: ChartMetric },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientMessage {
    Input(ViewInput),
    /// Manual retry after a data-unavailable notice.
    Reload,
}

/// Server-to-client message wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ServerMessage {
    /// Full view snapshot after every state change.
    View(ViewModel),
    /// A client frame could not be decoded.
    Error { message: String },
}
