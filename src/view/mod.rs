//! The leaderboard view-model: an immutable `ViewState` plus pure
//! derivation of everything the front-end renders from it.

pub mod chart;
pub mod compare;
pub mod filter;
pub mod rows;

use crate::data::Dataset;
use crate::protocol::{
    CategoryTab, ChartMetric, ProviderFilter, RowSet, SortSpec, ViewInput, ViewMode, ViewModel,
};
use compare::ComparisonSelection;

// ── View state ──────────────────────────────────────────────────────

/// Per-session UI state. Transitions return a new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub active_category: Option<String>,
    pub search: String,
    pub provider: ProviderFilter,
    pub sort: Option<SortSpec>,
    pub comparison: ComparisonSelection,
    pub mode: ViewMode,
    pub chart_metric: ChartMetric,
}

impl ViewState {
    pub fn apply(&self, input: &ViewInput) -> ViewState {
        let mut next = self.clone();
        match input {
            ViewInput::SelectCategory { id } => next.active_category = Some(id.clone()),
            ViewInput::Search { query } => next.search = query.clone(),
            ViewInput::SelectProvider { provider } => next.provider = *provider,
            ViewInput::SortBy { key } => next.sort = Some(filter::toggle(self.sort, *key)),
            ViewInput::ToggleCompare { name } => next.comparison = self.comparison.toggled(name),
            ViewInput::ClearComparison => next.comparison = ComparisonSelection::default(),
            ViewInput::SetMode { mode } => next.mode = *mode,
            ViewInput::SetChartMetric { metric } => next.chart_metric = *metric,
        }
        next
    }
}

// ── Derivation ──────────────────────────────────────────────────────

/// Active category → normalized rows → filter → sort, plus the comparison
/// payload and (in chart mode) the bar series of the visible rows.
pub fn derive(dataset: &Dataset, state: &ViewState) -> ViewModel {
    let category = dataset.category(state.active_category.as_deref());

    let tabs = dataset
        .categories()
        .iter()
        .map(|c| CategoryTab {
            id: c.id.clone(),
            name: c.name.clone(),
            active: category.is_some_and(|active| active.id == c.id),
        })
        .collect();

    let rows = category
        .map(|c| rows::normalize(c, &state.comparison))
        .unwrap_or_default();
    let rows = filter::filter(rows, &state.search, state.provider);
    let rows = match state.sort {
        Some(spec) => filter::sort(rows, spec),
        None => rows,
    };

    let rows = if rows.is_empty() {
        RowSet::NoMatches {
            search: state.search.clone(),
            provider: state.provider,
        }
    } else {
        RowSet::Rows { rows }
    };

    let chart = match state.mode {
        ViewMode::Chart => Some(chart::series(rows.rows(), state.chart_metric)),
        ViewMode::Table => None,
    };

    ViewModel {
        status: dataset.status().clone(),
        tabs,
        category_id: category.map(|c| c.id.clone()),
        title: category.map(|c| c.name.clone()).unwrap_or_default(),
        description: category.map(|c| c.description.clone()).unwrap_or_default(),
        search: state.search.clone(),
        provider: state.provider,
        sort: state.sort,
        mode: state.mode,
        rows,
        selection: state.comparison.names(),
        comparison: compare::comparison(dataset, &state.comparison),
        chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tables::builtin_categories;
    use crate::protocol::{
        BenchmarkCategory, BenchmarkModel, LoadStatus, Provider, SortDirection, SortKey,
    };

    fn builtin() -> Dataset {
        Dataset::new(builtin_categories(), LoadStatus::Ready)
    }

    fn apply_all(inputs: &[ViewInput]) -> ViewState {
        inputs
            .iter()
            .fold(ViewState::default(), |state, input| state.apply(input))
    }

    fn names(vm: &ViewModel) -> Vec<&str> {
        vm.rows.rows().iter().map(|r| r.model.name.as_str()).collect()
    }

    #[test]
    fn default_view_shows_first_category_in_provider_order() {
        let ds = builtin();
        let vm = derive(&ds, &ViewState::default());
        assert_eq!(vm.category_id.as_deref(), Some("chatbot-arena"));
        assert_eq!(vm.rows.rows().len(), 10);
        assert_eq!(names(&vm)[0], "Gemini 3 Pro");
        assert!(vm.tabs[0].active);
        assert!(vm.tabs[1..].iter().all(|t| !t.active));
        assert!(vm.comparison.is_none());
        assert!(vm.chart.is_none());
    }

    #[test]
    fn swe_bench_search_scenario() {
        let ds = Dataset::new(
            vec![BenchmarkCategory {
                id: "swe-bench-verified".to_string(),
                name: "SWE-bench Verified".to_string(),
                description: String::new(),
                models: vec![
                    BenchmarkModel {
                        rank: Some(1),
                        ..BenchmarkModel::new("Claude Opus 4.5", Provider::Anthropic, 80.9)
                    },
                    BenchmarkModel {
                        rank: Some(4),
                        ..BenchmarkModel::new("GPT-5.1", Provider::OpenAI, 76.3)
                    },
                ],
            }],
            LoadStatus::Ready,
        );
        let state = apply_all(&[
            ViewInput::SelectCategory {
                id: "swe-bench-verified".to_string(),
            },
            ViewInput::Search {
                query: "gpt".to_string(),
            },
        ]);
        let vm = derive(&ds, &state);
        assert_eq!(names(&vm), vec!["GPT-5.1"]);
        assert_eq!(vm.rows.rows()[0].display_rank, 4);
    }

    #[test]
    fn no_matches_is_distinguishable() {
        let ds = builtin();
        let state = ViewState::default().apply(&ViewInput::Search {
            query: "llama".to_string(),
        });
        let vm = derive(&ds, &state);
        assert_eq!(
            vm.rows,
            RowSet::NoMatches {
                search: "llama".to_string(),
                provider: ProviderFilter::All
            }
        );
    }

    #[test]
    fn stale_category_falls_back_to_first_tab() {
        let ds = builtin();
        let state = ViewState::default().apply(&ViewInput::SelectCategory {
            id: "openrouter-live".to_string(),
        });
        let vm = derive(&ds, &state);
        assert_eq!(vm.category_id.as_deref(), Some("chatbot-arena"));
    }

    #[test]
    fn empty_dataset_derives_without_panicking() {
        let ds = Dataset::new(
            Vec::new(),
            LoadStatus::Unavailable {
                message: "offline".to_string(),
            },
        );
        let state = apply_all(&[
            ViewInput::SetMode {
                mode: ViewMode::Chart,
            },
            ViewInput::ToggleCompare {
                name: "o1-pro".to_string(),
            },
        ]);
        let vm = derive(&ds, &state);
        assert!(vm.category_id.is_none());
        assert!(vm.tabs.is_empty());
        assert!(matches!(vm.rows, RowSet::NoMatches { .. }));
        assert!(vm.chart.unwrap().bars.is_empty());
        assert!(matches!(vm.status, LoadStatus::Unavailable { .. }));
    }

    #[test]
    fn sort_by_click_sequence() {
        let ds = builtin();
        let state = apply_all(&[
            ViewInput::SelectCategory {
                id: "livecodebench".to_string(),
            },
            ViewInput::SortBy { key: SortKey::Score },
        ]);
        let vm = derive(&ds, &state);
        assert_eq!(names(&vm)[0], "o1-mini");
        assert_eq!(
            vm.sort,
            Some(SortSpec {
                key: SortKey::Score,
                direction: SortDirection::Ascending
            })
        );

        let state = state.apply(&ViewInput::SortBy { key: SortKey::Score });
        let vm = derive(&ds, &state);
        assert_eq!(names(&vm)[0], "o1-pro");
    }

    #[test]
    fn provider_filter_and_chart_mode() {
        let ds = builtin();
        let state = apply_all(&[
            ViewInput::SelectCategory {
                id: "speed-price".to_string(),
            },
            ViewInput::SelectProvider {
                provider: ProviderFilter::Only(Provider::Google),
            },
            ViewInput::SetMode {
                mode: ViewMode::Chart,
            },
            ViewInput::SetChartMetric {
                metric: ChartMetric::SecondaryScore,
            },
        ]);
        let vm = derive(&ds, &state);
        assert_eq!(names(&vm), vec!["Gemini 3 Flash", "Gemini 3 Pro"]);
        let chart = vm.chart.unwrap();
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].height, 1.0);
        assert_eq!(chart.best.as_deref(), Some("Gemini 3 Flash"));
    }

    #[test]
    fn comparison_spans_categories_and_marks_rows() {
        let ds = builtin();
        let state = apply_all(&[
            ViewInput::ToggleCompare {
                name: "o1-pro".to_string(),
            },
            ViewInput::ToggleCompare {
                name: "Claude Opus 4.5".to_string(),
            },
        ]);
        let vm = derive(&ds, &state);
        let cmp = vm.comparison.unwrap();
        assert_eq!(cmp.left.name, "o1-pro");
        assert_eq!(cmp.right.name, "Claude Opus 4.5");
        assert!(cmp.shared.iter().any(|s| s.category_id == "swe-bench-verified"));
        let selected: Vec<&str> = vm
            .rows
            .rows()
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.model.name.as_str())
            .collect();
        assert_eq!(selected, vec!["Claude Opus 4.5", "o1-pro"]);

        let cleared = state.apply(&ViewInput::ClearComparison);
        assert!(derive(&ds, &cleared).comparison.is_none());
    }

    #[test]
    fn apply_does_not_mutate_previous_state() {
        let before = ViewState::default();
        let after = before.apply(&ViewInput::Search {
            query: "gemini".to_string(),
        });
        assert_eq!(before.search, "");
        assert_eq!(after.search, "gemini");
    }
}
