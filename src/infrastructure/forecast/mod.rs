// src/infrastructure/forecast/mod.rs
// Demand forecasting model: trainable regressor + iterative prediction loop

pub mod features;

use chrono::{Datelike, Duration};
use std::collections::BTreeMap;

use crate::domain::errors::{ForecastError, ForecastResult};
use crate::domain::model::{
    DemandAnalysis, PredictionRow, ProductStats, SalesRecord, TrainingReport,
};
use crate::domain::service::DemandForecastService;
use crate::infrastructure::regression::{RandomForestRegressor, StandardScaler};

use features::{build_features, product_order, LAG_LONG, LAG_SHORT};

/// Fitted state, owned exclusively by the model and replaced wholesale on
/// every train call
#[derive(Debug, Clone)]
struct TrainedState {
    scaler: StandardScaler,
    forest: RandomForestRegressor,
}

/// Demand forecasting model over a sales table.
///
/// Created untrained; `train` refits from scratch, `predict` reads the
/// fitted state and never mutates it. Callers serialize train/predict
/// externally (single writer, multiple readers).
#[derive(Debug, Clone)]
pub struct DemandForecastModel {
    tree_count: usize,
    max_depth: usize,
    seed: u64,
    state: Option<TrainedState>,
}

impl DemandForecastModel {
    pub fn new(tree_count: usize, max_depth: usize, seed: u64) -> Self {
        Self {
            tree_count,
            max_depth,
            seed,
            state: None,
        }
    }
}

impl Default for DemandForecastModel {
    /// Default parameters: 50 trees, depth 12, seed 42
    fn default() -> Self {
        Self::new(50, 12, 42)
    }
}

impl DemandForecastService for DemandForecastModel {
    fn train(&mut self, records: &[SalesRecord]) -> ForecastResult<TrainingReport> {
        let feature_rows = build_features(records);

        // Keep only rows whose lag/rolling features had full history
        let mut matrix: Vec<Vec<f64>> = Vec::new();
        let mut labels: Vec<f64> = Vec::new();
        for (row, record) in feature_rows.iter().zip(records.iter()) {
            if row.is_complete() {
                matrix.push(row.vector().to_vec());
                labels.push(record.quantity as f64);
            }
        }

        if matrix.is_empty() {
            return Err(ForecastError::InvalidTrainingData(format!(
                "no usable rows after feature filtering ({} input rows, window {} days)",
                records.len(),
                LAG_LONG
            )));
        }

        let (scaler, scaled) = StandardScaler::fit_transform(&matrix);

        let mut forest = RandomForestRegressor::new(self.tree_count, self.max_depth, self.seed);
        forest.fit(&scaled, &labels);

        self.state = Some(TrainedState { scaler, forest });
        log::info!(
            "Demand model trained on {} of {} rows",
            matrix.len(),
            records.len()
        );

        Ok(TrainingReport {
            samples: matrix.len(),
        })
    }

    fn predict(
        &self,
        records: &[SalesRecord],
        horizon_days: u32,
    ) -> ForecastResult<Vec<PredictionRow>> {
        let state = self.state.as_ref().ok_or(ForecastError::ModelNotTrained)?;

        let mut predictions = Vec::new();

        for product_id in product_order(records) {
            let mut product: Vec<&SalesRecord> = records
                .iter()
                .filter(|r| r.product_id == product_id)
                .collect();
            product.sort_by_key(|r| r.date);

            // The last date is the max after sorting
            let last_date = match product.last() {
                Some(record) => record.date,
                None => continue,
            };

            // Fixed recency window for the whole horizon: predictions are
            // never fed back into it
            let recent: Vec<f64> = product
                .iter()
                .rev()
                .take(LAG_LONG)
                .rev()
                .map(|r| r.quantity as f64)
                .collect();

            let short_mean = if recent.len() >= LAG_SHORT {
                mean(&recent[recent.len() - LAG_SHORT..])
            } else {
                0.0
            };
            let long_mean = mean(&recent);

            log::debug!(
                "Forecasting {} days for {} from {} ({} recent rows)",
                horizon_days,
                product_id,
                last_date,
                recent.len()
            );

            for i in 1..=i64::from(horizon_days) {
                let future_date = last_date + Duration::days(i);
                let day_of_week = future_date.weekday().num_days_from_monday();

                // Lag and rolling features degenerate to the two recency
                // means during prediction, matching the reference model
                let vector = [
                    day_of_week as f64,
                    future_date.month() as f64,
                    if day_of_week >= 5 { 1.0 } else { 0.0 },
                    short_mean,
                    long_mean,
                    short_mean,
                    long_mean,
                ];

                let scaled = state.scaler.transform_row(&vector);
                let predicted = state.forest.predict(&scaled).max(0.0);

                predictions.push(PredictionRow {
                    product_id: product_id.to_string(),
                    date: future_date,
                    predicted_quantity: round2(predicted),
                });
            }
        }

        log::info!(
            "Generated {} predictions over a {}-day horizon",
            predictions.len(),
            horizon_days
        );
        Ok(predictions)
    }

    fn analyze(&self, records: &[SalesRecord]) -> DemandAnalysis {
        let mut product_stats: Vec<ProductStats> = Vec::new();
        for product_id in product_order(records) {
            let quantities: Vec<u64> = records
                .iter()
                .filter(|r| r.product_id == product_id)
                .map(|r| u64::from(r.quantity))
                .collect();
            let total: u64 = quantities.iter().sum();
            product_stats.push(ProductStats {
                product_id: product_id.to_string(),
                total_quantity: total,
                avg_quantity: round2(total as f64 / quantities.len() as f64),
                orders: quantities.len(),
            });
        }

        let mut by_total = product_stats.clone();
        by_total.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
        let top_products: Vec<ProductStats> = by_total.iter().take(10).cloned().collect();
        let bottom_products: Vec<ProductStats> =
            by_total.iter().rev().take(10).cloned().collect();

        let mut daily: BTreeMap<chrono::NaiveDate, u64> = BTreeMap::new();
        let mut monthly: BTreeMap<u32, u64> = BTreeMap::new();
        for record in records {
            *daily.entry(record.date).or_insert(0) += u64::from(record.quantity);
            *monthly.entry(record.date.month()).or_insert(0) += u64::from(record.quantity);
        }
        let daily_avg = if daily.is_empty() {
            0.0
        } else {
            daily.values().map(|&q| q as f64).sum::<f64>() / daily.len() as f64
        };

        DemandAnalysis {
            unique_products: product_stats.len(),
            product_stats,
            top_products,
            bottom_products,
            daily_avg,
            monthly_totals: monthly.into_iter().collect(),
            total_orders: records.len(),
        }
    }

    fn is_trained(&self) -> bool {
        self.state.is_some()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn daily_records(product: &str, days: u32) -> Vec<SalesRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..days)
            .map(|i| SalesRecord {
                product_id: product.to_string(),
                date: start + Duration::days(i as i64),
                quantity: 5 + (i % 9),
                price: 25.0,
            })
            .collect()
    }

    #[test]
    fn predict_before_train_fails() {
        let model = DemandForecastModel::default();
        let records = daily_records("P1", 60);

        let err = model.predict(&records, 5).unwrap_err();
        assert!(matches!(err, ForecastError::ModelNotTrained));
        assert!(!model.is_trained());
    }

    #[test]
    fn tiny_table_yields_invalid_training_data() {
        let mut model = DemandForecastModel::default();
        let records = vec![
            SalesRecord {
                product_id: "P1".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                quantity: 5,
                price: 10.0,
            },
            SalesRecord {
                product_id: "P1".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                quantity: 7,
                price: 10.0,
            },
        ];

        let err = model.train(&records).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidTrainingData(_)));
        assert!(!model.is_trained());
    }

    #[test]
    fn train_counts_only_rows_with_full_history() {
        let mut model = DemandForecastModel::new(5, 8, 42);
        let records = daily_records("P1", 60);

        let report = model.train(&records).unwrap();
        // Rows 0..30 lack a 30-day window; 30..60 survive
        assert_eq!(report.samples, 30);
        assert!(model.is_trained());
    }

    #[test]
    fn train_then_predict_succeeds() {
        let mut model = DemandForecastModel::new(5, 8, 42);
        let records = daily_records("P1", 60);

        model.train(&records).unwrap();
        let predictions = model.predict(&records, 7).unwrap();
        assert_eq!(predictions.len(), 7);
    }

    #[test]
    fn prediction_count_is_horizon_times_products() {
        let mut model = DemandForecastModel::new(5, 8, 42);
        let mut records = daily_records("P1", 60);
        records.extend(daily_records("P2", 60));
        records.extend(daily_records("P3", 60));

        model.train(&records).unwrap();
        let predictions = model.predict(&records, 14).unwrap();
        assert_eq!(predictions.len(), 14 * 3);
    }

    #[test]
    fn predictions_are_nonnegative_and_two_decimal() {
        let mut model = DemandForecastModel::new(5, 8, 42);
        let records = daily_records("P1", 60);

        model.train(&records).unwrap();
        for row in model.predict(&records, 10).unwrap() {
            assert!(row.predicted_quantity >= 0.0);
            let cents = row.predicted_quantity * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn prediction_rows_follow_first_encounter_product_order() {
        let mut model = DemandForecastModel::new(5, 8, 42);
        let mut records = daily_records("ZED", 60);
        records.extend(daily_records("ALPHA", 60));

        model.train(&records).unwrap();
        let predictions = model.predict(&records, 3).unwrap();

        let ids: Vec<&str> = predictions.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["ZED", "ZED", "ZED", "ALPHA", "ALPHA", "ALPHA"]);

        // Dates ascend within each product, starting the day after the last sale
        let last = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(59);
        assert_eq!(predictions[0].date, last + Duration::days(1));
        assert_eq!(predictions[2].date, last + Duration::days(3));
    }

    #[test]
    fn retraining_replaces_fitted_state() {
        let mut model = DemandForecastModel::new(5, 8, 42);
        let low = daily_records("P1", 60);
        let high: Vec<SalesRecord> = low
            .iter()
            .map(|r| SalesRecord {
                quantity: r.quantity * 10,
                ..r.clone()
            })
            .collect();

        model.train(&low).unwrap();
        let before = model.predict(&low, 1).unwrap()[0].predicted_quantity;

        model.train(&high).unwrap();
        let after = model.predict(&high, 1).unwrap()[0].predicted_quantity;

        assert!(after > before);
    }

    #[test]
    fn analyze_reports_product_and_time_patterns() {
        let model = DemandForecastModel::default();
        let mut records = daily_records("P1", 10);
        records.extend(daily_records("P2", 5));

        let analysis = model.analyze(&records);
        assert_eq!(analysis.unique_products, 2);
        assert_eq!(analysis.total_orders, 15);
        assert_eq!(analysis.product_stats[0].product_id, "P1");
        assert_eq!(analysis.product_stats[0].orders, 10);
        assert_eq!(analysis.monthly_totals.len(), 1);
        assert_eq!(analysis.monthly_totals[0].0, 1);
        assert!(analysis.daily_avg > 0.0);
        assert_eq!(analysis.top_products[0].product_id, "P1");
        assert_eq!(analysis.bottom_products[0].product_id, "P2");
    }
}
