// src/domain/service/mod.rs
// Domain service interfaces

use crate::domain::errors::{ForecastResult, SustainabilityResult};
use crate::domain::model::{
    BenchmarkEntry, DemandAnalysis, ImprovementReport, PredictionRow, SalesRecord, ScoredProduct,
    SustainabilityAnalysis, SustainabilityRecord, TrainingReport,
};

pub trait DemandForecastService {
    /// Refit the model from scratch on a sales table
    fn train(&mut self, records: &[SalesRecord]) -> ForecastResult<TrainingReport>;

    /// Forecast daily quantities per product over a horizon.
    /// Fails with ModelNotTrained before the first successful train.
    fn predict(
        &self,
        records: &[SalesRecord],
        horizon_days: u32,
    ) -> ForecastResult<Vec<PredictionRow>>;

    /// Summarize demand patterns; independent of trained state
    fn analyze(&self, records: &[SalesRecord]) -> DemandAnalysis;

    /// Whether a successful train has happened. Never triggers training.
    fn is_trained(&self) -> bool;
}

pub trait SustainabilityService {
    /// Score every product in the snapshot
    fn score(&self, records: &[SustainabilityRecord]) -> SustainabilityResult<Vec<ScoredProduct>>;

    /// Aggregate score/factor statistics over the snapshot
    fn analyze(
        &self,
        records: &[SustainabilityRecord],
    ) -> SustainabilityResult<SustainabilityAnalysis>;

    /// Rank products by score, optionally within one category
    fn benchmark(
        &self,
        records: &[SustainabilityRecord],
        category: Option<&str>,
    ) -> SustainabilityResult<Vec<BenchmarkEntry>>;

    /// Suggest factor improvements for one product
    fn improvements(
        &self,
        records: &[SustainabilityRecord],
        product_id: &str,
    ) -> SustainabilityResult<ImprovementReport>;
}
