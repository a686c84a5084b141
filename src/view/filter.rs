use std::cmp::Ordering;

use crate::protocol::{ProviderFilter, Row, SortDirection, SortKey, SortSpec};

// ── Filter ──────────────────────────────────────────────────────────

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_search(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}

/// Keeps rows matching both the search text and the provider selector,
/// in their incoming order.
pub fn filter(rows: Vec<Row>, search: &str, provider: ProviderFilter) -> Vec<Row> {
    rows.into_iter()
        .filter(|r| matches_search(&r.model.name, search) && provider.matches(r.model.provider))
        .collect()
}

// ── Sort ────────────────────────────────────────────────────────────

/// Clicking a column: the same key flips direction, a new key starts
/// ascending.
pub fn toggle(current: Option<SortSpec>, key: SortKey) -> SortSpec {
    match current {
        Some(spec) if spec.key == key => SortSpec {
            key,
            direction: spec.direction.flipped(),
        },
        _ => SortSpec {
            key,
            direction: SortDirection::Ascending,
        },
    }
}

fn numeric(row: &Row, key: SortKey) -> Option<f64> {
    let m = &row.model;
    match key {
        SortKey::Score => Some(m.score),
        SortKey::MaxScore => m.max_score,
        SortKey::SecondaryScore => m.secondary_score,
        SortKey::TertiaryScore => m.tertiary_score,
        SortKey::InputPrice => m.input_price,
        SortKey::OutputPrice => m.output_price,
        SortKey::Rank | SortKey::Name | SortKey::Provider => None,
    }
}

/// Total order for one key. Direction reverses the comparison of defined
/// values only; rows without a value for the key sit after every row that
/// has one, in either direction, and tie among themselves.
fn compare(a: &Row, b: &Row, spec: SortSpec) -> Ordering {
    let directed = |ord: Ordering| match spec.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    };

    match spec.key {
        SortKey::Name => directed(a.model.name.cmp(&b.model.name)),
        SortKey::Provider => directed(a.model.provider.label().cmp(b.model.provider.label())),
        SortKey::Rank => directed(a.display_rank.cmp(&b.display_rank)),
        key => match (numeric(a, key), numeric(b, key)) {
            (Some(x), Some(y)) => directed(x.total_cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Stable sort; rows comparing equal keep their incoming order.
pub fn sort(mut rows: Vec<Row>, spec: SortSpec) -> Vec<Row> {
    rows.sort_by(|a, b| compare(a, b, spec));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{BenchmarkCategory, BenchmarkModel, Provider};
    use crate::view::compare::ComparisonSelection;
    use crate::view::rows::normalize;

    fn rows_of(models: Vec<BenchmarkModel>) -> Vec<Row> {
        let cat = BenchmarkCategory {
            id: "t".to_string(),
            name: "T".to_string(),
            description: String::new(),
            models,
        };
        normalize(&cat, &ComparisonSelection::default())
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.model.name.as_str()).collect()
    }

    fn spec(key: SortKey, direction: SortDirection) -> SortSpec {
        SortSpec { key, direction }
    }

    fn swe_bench() -> Vec<Row> {
        rows_of(vec![
            BenchmarkModel {
                rank: Some(1),
                ..BenchmarkModel::new("Claude Opus 4.5", Provider::Anthropic, 80.9)
            },
            BenchmarkModel {
                rank: Some(4),
                ..BenchmarkModel::new("GPT-5.1", Provider::OpenAI, 76.3)
            },
        ])
    }

    // ---- filter ----

    #[test]
    fn search_is_case_insensitive_substring() {
        let out = filter(swe_bench(), "gpt", ProviderFilter::All);
        assert_eq!(names(&out), vec!["GPT-5.1"]);
        assert_eq!(out[0].display_rank, 4);
    }

    #[test]
    fn every_kept_row_matches_and_every_dropped_row_does_not() {
        let rows = rows_of(vec![
            BenchmarkModel::new("Gemini 3 Pro", Provider::Google, 1.0),
            BenchmarkModel::new("GPT-5.2-high", Provider::OpenAI, 2.0),
            BenchmarkModel::new("o1-pro", Provider::OpenAI, 3.0),
            BenchmarkModel::new("Grok 4.1", Provider::XAi, 4.0),
        ]);
        for query in ["pro", "PRO", "g", "4.", "", "zzz"] {
            let kept = filter(rows.clone(), query, ProviderFilter::All);
            for r in &kept {
                assert!(r.model.name.to_lowercase().contains(&query.to_lowercase()));
            }
            let dropped = rows
                .iter()
                .filter(|r| !kept.iter().any(|k| k.model.name == r.model.name));
            for r in dropped {
                assert!(!r.model.name.to_lowercase().contains(&query.to_lowercase()));
            }
        }
    }

    #[test]
    fn provider_filter_combines_with_search() {
        let rows = rows_of(vec![
            BenchmarkModel::new("Gemini 3 Pro", Provider::Google, 1.0),
            BenchmarkModel::new("o1-pro", Provider::OpenAI, 3.0),
            BenchmarkModel::new("GPT-5.1", Provider::OpenAI, 2.0),
        ]);
        let out = filter(rows.clone(), "pro", ProviderFilter::Only(Provider::OpenAI));
        assert_eq!(names(&out), vec!["o1-pro"]);
        let out = filter(rows, "", ProviderFilter::Only(Provider::Anthropic));
        assert!(out.is_empty());
    }

    // ---- sort ----

    #[test]
    fn descending_score_keeps_ties_in_input_order() {
        let rows = rows_of(vec![
            BenchmarkModel::new("B", Provider::OpenAI, 10.0),
            BenchmarkModel::new("A", Provider::OpenAI, 10.0),
            BenchmarkModel::new("C", Provider::OpenAI, 5.0),
        ]);
        let out = sort(rows, spec(SortKey::Score, SortDirection::Descending));
        assert_eq!(names(&out), vec!["B", "A", "C"]);
    }

    #[test]
    fn desc_after_asc_reverses_except_within_ties() {
        let rows = rows_of(vec![
            BenchmarkModel::new("p", Provider::OpenAI, 2.0),
            BenchmarkModel::new("q", Provider::OpenAI, 1.0),
            BenchmarkModel::new("r", Provider::OpenAI, 2.0),
            BenchmarkModel::new("s", Provider::OpenAI, 3.0),
        ]);
        let asc = sort(rows, spec(SortKey::Score, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["q", "p", "r", "s"]);
        let desc = sort(asc, spec(SortKey::Score, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["s", "p", "r", "q"]);
    }

    #[test]
    fn name_sort_is_lexicographic() {
        let rows = rows_of(vec![
            BenchmarkModel::new("o1-pro", Provider::OpenAI, 1.0),
            BenchmarkModel::new("Claude Opus 4.5", Provider::Anthropic, 1.0),
            BenchmarkModel::new("Gemini 3 Pro", Provider::Google, 1.0),
        ]);
        let out = sort(rows, spec(SortKey::Name, SortDirection::Ascending));
        assert_eq!(names(&out), vec!["Claude Opus 4.5", "Gemini 3 Pro", "o1-pro"]);
    }

    #[test]
    fn rank_sort_uses_display_rank() {
        let rows = rows_of(vec![
            BenchmarkModel {
                rank: Some(5),
                ..BenchmarkModel::new("late", Provider::OpenAI, 1.0)
            },
            BenchmarkModel::new("second", Provider::OpenAI, 1.0),
        ]);
        let out = sort(rows, spec(SortKey::Rank, SortDirection::Ascending));
        assert_eq!(names(&out), vec!["second", "late"]);
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let rows = rows_of(vec![
            BenchmarkModel::new("none-1", Provider::OpenAI, 1.0),
            BenchmarkModel {
                secondary_score: Some(50.0),
                ..BenchmarkModel::new("slow", Provider::OpenAI, 1.0)
            },
            BenchmarkModel::new("none-2", Provider::OpenAI, 1.0),
            BenchmarkModel {
                secondary_score: Some(200.0),
                ..BenchmarkModel::new("fast", Provider::OpenAI, 1.0)
            },
        ]);
        let asc = sort(rows.clone(), spec(SortKey::SecondaryScore, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["slow", "fast", "none-1", "none-2"]);
        let desc = sort(rows, spec(SortKey::SecondaryScore, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["fast", "slow", "none-1", "none-2"]);
    }

    #[test]
    fn defined_value_moves_ahead_of_missing_one() {
        let rows = rows_of(vec![
            BenchmarkModel::new("none", Provider::Google, 1.0),
            BenchmarkModel {
                secondary_score: Some(5.0),
                ..BenchmarkModel::new("five", Provider::Google, 1.0)
            },
        ]);
        let asc = sort(rows, spec(SortKey::SecondaryScore, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["five", "none"]);
    }

    // ---- toggle ----

    #[test]
    fn same_key_flips_and_new_key_resets() {
        let first = toggle(None, SortKey::Score);
        assert_eq!(first.direction, SortDirection::Ascending);
        let second = toggle(Some(first), SortKey::Score);
        assert_eq!(second.direction, SortDirection::Descending);
        let third = toggle(Some(second), SortKey::Score);
        assert_eq!(third, first);
        let other = toggle(Some(second), SortKey::Name);
        assert_eq!(other, spec(SortKey::Name, SortDirection::Ascending));
    }

    #[test]
    fn toggling_twice_restores_stable_ascending_order() {
        let rows = rows_of(vec![
            BenchmarkModel::new("B", Provider::OpenAI, 10.0),
            BenchmarkModel::new("A", Provider::OpenAI, 10.0),
            BenchmarkModel::new("C", Provider::OpenAI, 5.0),
        ]);
        let s1 = toggle(None, SortKey::Score);
        let s2 = toggle(Some(s1), SortKey::Score);
        let s3 = toggle(Some(s2), SortKey::Score);
        let once = sort(rows.clone(), s1);
        let thrice = sort(sort(sort(rows, s1), s2), s3);
        assert_eq!(names(&once), vec!["C", "B", "A"]);
        assert_eq!(names(&thrice), names(&once));
    }
}
