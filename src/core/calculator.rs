use crate::core::{Dataset, IntervalRecord, OutputItem, OutputRecord, SamplePoint};
use std::cmp::Ordering;

/// Computes one [`OutputRecord`] per sample point, in series order.
pub fn calculate(dataset: &Dataset) -> Vec<OutputRecord> {
    tracing::debug!("--- Calculating ---");
    dataset
        .series
        .iter()
        .map(|&section| calculate_point(section, &dataset.intervals))
        .collect()
}

/// Breakdown for a single sample point.
///
/// Rates are only computed for intervals containing `section`, which implies
/// `stop > start`, so a zero-length interval never reaches the division.
pub fn calculate_point(section: SamplePoint, intervals: &[IntervalRecord]) -> OutputRecord {
    let active: Vec<(&str, f64)> = intervals
        .iter()
        .filter(|record| record.contains(section))
        .map(|record| (record.name.as_str(), record.active_rate()))
        .collect();

    let total: f64 = active.iter().map(|(_, rate)| rate).sum();
    tracing::debug!(
        "series={} active={} total_rate={}",
        section,
        active.len(),
        total
    );

    let mut items: Vec<OutputItem> = active
        .into_iter()
        .map(|(name, rate)| OutputItem {
            name: name.to_string(),
            rate: normalize(rate, total),
        })
        .collect();
    items.sort_by(compare_items);

    OutputRecord { section, items }
}

/// Ascending by rate, then ascending by name.
pub fn compare_items(a: &OutputItem, b: &OutputItem) -> Ordering {
    a.rate
        .total_cmp(&b.rate)
        .then_with(|| a.name.cmp(&b.name))
}

fn normalize(rate: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_half_up(rate * 100.0 / total)
}

/// Rounds to one decimal place, halves going up.
pub fn round_half_up(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
