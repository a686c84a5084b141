use crate::protocol::{BenchmarkCategory, Row};

use super::compare::ComparisonSelection;

/// Turns a category's models into display rows. This is the only place
/// optional fields are defaulted:
///
/// - `display_rank` is the model's own rank when present and non-zero,
///   otherwise its position in the category (1-based). Ranks may repeat
///   or skip; they are never used to reorder anything.
/// - `display_unit` is the unit suffix or an empty string.
/// - `percent_of_max` exists only when `max_score` is positive.
pub fn normalize(category: &BenchmarkCategory, selection: &ComparisonSelection) -> Vec<Row> {
    category
        .models
        .iter()
        .enumerate()
        .map(|(index, model)| Row {
            display_rank: model
                .rank
                .filter(|r| *r > 0)
                .unwrap_or(index as u32 + 1),
            display_unit: model.unit.clone().unwrap_or_default(),
            percent_of_max: model
                .max_score
                .filter(|max| *max > 0.0)
                .map(|max| model.score / max * 100.0),
            selected: selection.contains(&model.name),
            model: model.clone(),
        })
        .collect()
}
