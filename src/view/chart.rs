use crate::protocol::{ChartBar, ChartMetric, ChartSeries, Row};

/// Smallest bar height, so zero values still render as a sliver.
pub const MIN_BAR_FRACTION: f64 = 0.02;

/// Scales each value by the series maximum, clamped to
/// `[MIN_BAR_FRACTION, 1.0]`. A non-positive maximum puts every bar at the
/// floor. Empty input gives empty output.
pub fn normalize_values(values: &[f64]) -> Vec<f64> {
    let Some(max) = values.iter().copied().reduce(f64::max) else {
        return Vec::new();
    };
    if max <= 0.0 {
        return vec![MIN_BAR_FRACTION; values.len()];
    }
    values
        .iter()
        .map(|v| (v / max).clamp(MIN_BAR_FRACTION, 1.0))
        .collect()
}

/// Builds the bar series for the visible rows. Rows without a finite value
/// for the metric are left out.
pub fn series(rows: &[Row], metric: ChartMetric) -> ChartSeries {
    let points: Vec<(&Row, f64)> = rows
        .iter()
        .filter_map(|r| metric.value(&r.model).filter(|v| v.is_finite()).map(|v| (r, v)))
        .collect();

    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let heights = normalize_values(&values);

    let inverse = metric.is_inverse();
    let best = points
        .iter()
        .fold(None::<(&Row, f64)>, |best, &(row, v)| match best {
            Some((_, b)) if (inverse && v >= b) || (!inverse && v <= b) => best,
            _ => Some((row, v)),
        })
        .map(|(row, _)| row.model.name.clone());

    let bars = points
        .iter()
        .zip(heights)
        .map(|((row, value), height)| ChartBar {
            name: row.model.name.clone(),
            provider: row.model.provider,
            value: *value,
            height,
        })
        .collect();

    ChartSeries {
        metric,
        inverse,
        best,
        bars,
    }
}
