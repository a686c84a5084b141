use std::collections::VecDeque;

use crate::data::Dataset;
use crate::protocol::{Comparison, SharedScore};

pub const TRAY_CAPACITY: usize = 2;

/// The comparison tray: at most two model names, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSelection {
    names: VecDeque<String>,
}

impl ComparisonSelection {
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    /// Selecting a held name removes it. Otherwise the name is appended,
    /// evicting the oldest entry when the tray is full.
    pub fn toggled(&self, name: &str) -> Self {
        let mut names = self.names.clone();
        if let Some(pos) = names.iter().position(|n| n == name) {
            names.remove(pos);
        } else {
            if names.len() == TRAY_CAPACITY {
                names.pop_front();
            }
            names.push_back(name.to_string());
        }
        Self { names }
    }
}

/// Side-by-side payload, present only when the tray holds two names that
/// both resolve in the dataset.
pub fn comparison(dataset: &Dataset, selection: &ComparisonSelection) -> Option<Comparison> {
    if selection.names.len() != TRAY_CAPACITY {
        return None;
    }
    let left_name = &selection.names[0];
    let right_name = &selection.names[1];
    let left = dataset.find_model(left_name)?.clone();
    let right = dataset.find_model(right_name)?.clone();

    let shared = dataset
        .categories()
        .iter()
        .filter_map(|cat| {
            let l = cat.models.iter().find(|m| &m.name == left_name)?;
            let r = cat.models.iter().find(|m| &m.name == right_name)?;
            Some(SharedScore {
                category_id: cat.id.clone(),
                category_name: cat.name.clone(),
                unit: l.unit.clone().unwrap_or_default(),
                left: l.score,
                right: r.score,
            })
        })
        .collect();

    Some(Comparison { left, right, shared })
}
