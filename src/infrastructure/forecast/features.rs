// src/infrastructure/forecast/features.rs
// Feature builder: calendar features + per-product lag/rolling statistics

use chrono::Datelike;
use std::collections::{HashMap, HashSet};

use crate::domain::model::{FeatureRow, SalesRecord};

/// Short lag/rolling window in days
pub const LAG_SHORT: usize = 7;
/// Long lag/rolling window in days
pub const LAG_LONG: usize = 30;

/// Build one feature row per input record, index-aligned with the input.
///
/// Records are grouped by product and each group is sorted by date with a
/// stable sort, so lag positions are deterministic even for duplicate
/// dates. Lag/rolling features stay `None` until the product has enough
/// history (rolling windows require the full window to be present).
pub fn build_features(records: &[SalesRecord]) -> Vec<FeatureRow> {
    let mut rows: Vec<FeatureRow> = records
        .iter()
        .map(|record| {
            let day_of_week = record.date.weekday().num_days_from_monday();
            FeatureRow {
                day_of_week,
                month: record.date.month(),
                is_weekend: (day_of_week >= 5) as u8,
                quantity_lag_7: None,
                quantity_lag_30: None,
                quantity_avg_7: None,
                quantity_avg_30: None,
            }
        })
        .collect();

    for indices in group_by_product(records).values() {
        let mut ordered = indices.clone();
        ordered.sort_by_key(|&i| records[i].date);

        let quantities: Vec<f64> = ordered.iter().map(|&i| records[i].quantity as f64).collect();

        for (pos, &i) in ordered.iter().enumerate() {
            rows[i].quantity_lag_7 = lag(&quantities, pos, LAG_SHORT);
            rows[i].quantity_lag_30 = lag(&quantities, pos, LAG_LONG);
            rows[i].quantity_avg_7 = trailing_mean(&quantities, pos, LAG_SHORT);
            rows[i].quantity_avg_30 = trailing_mean(&quantities, pos, LAG_LONG);
        }
    }

    rows
}

/// Distinct product ids in first-encounter order
pub fn product_order(records: &[SalesRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for record in records {
        if seen.insert(record.product_id.as_str()) {
            order.push(record.product_id.as_str());
        }
    }
    order
}

/// Record indices grouped by product id
fn group_by_product(records: &[SalesRecord]) -> HashMap<&str, Vec<usize>> {
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        groups.entry(record.product_id.as_str()).or_default().push(i);
    }
    groups
}

/// Value `k` positions earlier in the product sequence
fn lag(values: &[f64], pos: usize, k: usize) -> Option<f64> {
    pos.checked_sub(k).map(|earlier| values[earlier])
}

/// Mean of the trailing window of exactly `window` values ending at `pos`
fn trailing_mean(values: &[f64], pos: usize, window: usize) -> Option<f64> {
    if pos + 1 < window {
        return None;
    }
    let start = pos + 1 - window;
    Some(values[start..=pos].iter().sum::<f64>() / window as f64)
}
