// src/application/dto/mod.rs
// Response DTOs handed to the serving layer

use serde::Serialize;
use thiserror::Error;

use crate::domain::model::{BenchmarkEntry, PredictionRow, ScoredProduct, TrainingReport};

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    DomainError(String),
}

/// Training outcome as reported to callers
#[derive(Debug, Clone, Serialize)]
pub struct TrainResponse {
    pub status: String,
    pub samples: usize,
}

impl From<TrainingReport> for TrainResponse {
    fn from(report: TrainingReport) -> Self {
        Self {
            status: "trained".to_string(),
            samples: report.samples,
        }
    }
}

/// One forecasted day, with the date rendered as YYYY-MM-DD
#[derive(Debug, Clone, Serialize)]
pub struct PredictionDto {
    pub product_id: String,
    pub date: String,
    pub predicted_quantity: f64,
}

impl From<PredictionRow> for PredictionDto {
    fn from(row: PredictionRow) -> Self {
        Self {
            product_id: row.product_id,
            date: row.date.format("%Y-%m-%d").to_string(),
            predicted_quantity: row.predicted_quantity,
        }
    }
}

/// A full forecast run
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub predictions: Vec<PredictionDto>,
    pub forecast_days: u32,
}

/// One scored product
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProductDto {
    pub product_id: String,
    pub category: String,
    pub sustainability_score: f64,
    pub sustainability_level: String,
}

impl From<ScoredProduct> for ScoredProductDto {
    fn from(product: ScoredProduct) -> Self {
        Self {
            product_id: product.product_id,
            category: product.category,
            sustainability_score: product.score,
            sustainability_level: product.level.to_string(),
        }
    }
}

/// One product's standing within a benchmarked snapshot
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkDto {
    pub product_id: String,
    pub sustainability_score: f64,
    pub sustainability_level: String,
    pub rank: usize,
    pub percentile: f64,
}

impl From<BenchmarkEntry> for BenchmarkDto {
    fn from(entry: BenchmarkEntry) -> Self {
        Self {
            product_id: entry.product_id,
            sustainability_score: entry.score,
            sustainability_level: entry.level.to_string(),
            rank: entry.rank,
            percentile: entry.percentile,
        }
    }
}
