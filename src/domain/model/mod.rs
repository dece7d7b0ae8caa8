// src/domain/model/mod.rs
// Core domain models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of features fed to the demand regression model
pub const FEATURE_COUNT: usize = 7;

/// A single sales observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    pub product_id: String,
    pub date: NaiveDate,
    pub quantity: u32,
    pub price: f64,
}

/// Feature vector derived from one sales record plus its product history.
///
/// Lag and rolling values are `None` while the product has insufficient
/// history; `vector` fills those with 0.0 and training filters on
/// `is_complete`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// Day of week, Monday = 0 .. Sunday = 6
    pub day_of_week: u32,
    /// Calendar month, 1..=12
    pub month: u32,
    /// 1 when day_of_week is 5 or 6
    pub is_weekend: u8,
    pub quantity_lag_7: Option<f64>,
    pub quantity_lag_30: Option<f64>,
    pub quantity_avg_7: Option<f64>,
    pub quantity_avg_30: Option<f64>,
}

impl FeatureRow {
    /// Dense feature vector with missing lag/rolling values replaced by 0
    pub fn vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.day_of_week as f64,
            self.month as f64,
            self.is_weekend as f64,
            self.quantity_lag_7.unwrap_or(0.0),
            self.quantity_lag_30.unwrap_or(0.0),
            self.quantity_avg_7.unwrap_or(0.0),
            self.quantity_avg_30.unwrap_or(0.0),
        ]
    }

    /// True when every lag/rolling feature had enough history
    pub fn is_complete(&self) -> bool {
        self.quantity_lag_7.is_some()
            && self.quantity_lag_30.is_some()
            && self.quantity_avg_7.is_some()
            && self.quantity_avg_30.is_some()
    }
}

/// One forecasted day for one product
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRow {
    pub product_id: String,
    pub date: NaiveDate,
    pub predicted_quantity: f64,
}

/// Outcome of a training run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrainingReport {
    /// Rows that survived feature filtering and were fitted on
    pub samples: usize,
}

/// Per-product sales summary
#[derive(Debug, Clone, Serialize)]
pub struct ProductStats {
    pub product_id: String,
    pub total_quantity: u64,
    pub avg_quantity: f64,
    pub orders: usize,
}

/// Aggregate demand patterns over a sales table
#[derive(Debug, Clone, Serialize)]
pub struct DemandAnalysis {
    /// One entry per product, in first-encounter order
    pub product_stats: Vec<ProductStats>,
    /// Up to 10 products with the highest total quantity
    pub top_products: Vec<ProductStats>,
    /// Up to 10 products with the lowest total quantity
    pub bottom_products: Vec<ProductStats>,
    /// Mean of per-day quantity totals
    pub daily_avg: f64,
    /// Quantity totals keyed by calendar month (1..=12), ascending
    pub monthly_totals: Vec<(u32, u64)>,
    pub total_orders: usize,
    pub unique_products: usize,
}

/// Sustainability factor set for one product.
///
/// Factors are optional; missing values are imputed from category or
/// global means during scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SustainabilityRecord {
    pub product_id: String,
    pub category: String,
    pub carbon_footprint: Option<f64>,
    pub recyclability: Option<f64>,
    pub packaging_score: Option<f64>,
    pub sourcing_score: Option<f64>,
    pub durability: Option<f64>,
    pub end_of_life_score: Option<f64>,
}

/// The six weighted sustainability factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Factor {
    CarbonFootprint,
    Recyclability,
    PackagingScore,
    SourcingScore,
    Durability,
    EndOfLifeScore,
}

impl Factor {
    /// Column name in the sustainability schema
    pub fn name(&self) -> &'static str {
        match self {
            Factor::CarbonFootprint => "carbon_footprint",
            Factor::Recyclability => "recyclability",
            Factor::PackagingScore => "packaging_score",
            Factor::SourcingScore => "sourcing_score",
            Factor::Durability => "durability",
            Factor::EndOfLifeScore => "end_of_life_score",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Sustainability classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SustainabilityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SustainabilityLevel {
    /// Classify a 0-100 composite score
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            SustainabilityLevel::Excellent
        } else if score >= 60.0 {
            SustainabilityLevel::Good
        } else if score >= 40.0 {
            SustainabilityLevel::Fair
        } else {
            SustainabilityLevel::Poor
        }
    }
}

impl std::fmt::Display for SustainabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SustainabilityLevel::Excellent => write!(f, "Excellent"),
            SustainabilityLevel::Good => write!(f, "Good"),
            SustainabilityLevel::Fair => write!(f, "Fair"),
            SustainabilityLevel::Poor => write!(f, "Poor"),
        }
    }
}

/// A product with its composite sustainability score
#[derive(Debug, Clone, Serialize)]
pub struct ScoredProduct {
    pub product_id: String,
    pub category: String,
    /// Composite score in [0, 100], rounded to 2 decimals
    pub score: f64,
    pub level: SustainabilityLevel,
}

/// One product's position within a (possibly category-filtered) snapshot
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkEntry {
    pub product_id: String,
    pub score: f64,
    pub level: SustainabilityLevel,
    /// Dense rank, 1 = best score
    pub rank: usize,
    /// Ascending percent rank in (0, 100]
    pub percentile: f64,
}

/// A factor where a product trails the dataset average
#[derive(Debug, Clone, Serialize)]
pub struct ImprovementSuggestion {
    pub factor: Factor,
    pub current_value: f64,
    pub average_value: f64,
    pub improvement_potential: f64,
    pub advice: String,
}

/// Improvement suggestions for one product
#[derive(Debug, Clone, Serialize)]
pub struct ImprovementReport {
    pub product_id: String,
    pub score: f64,
    pub level: SustainabilityLevel,
    pub suggestions: Vec<ImprovementSuggestion>,
}

/// Per-category score summary
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub avg_score: f64,
    pub products: usize,
}

/// Per-factor summary across a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct FactorStats {
    pub factor: Factor,
    /// Mean of the imputed (and, for carbon, inverted) factor values
    pub average: f64,
    pub weight: f64,
}

/// Aggregate sustainability patterns over a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SustainabilityAnalysis {
    pub avg_score: f64,
    pub score_distribution: Vec<(SustainabilityLevel, usize)>,
    /// Up to 10 (product_id, score) pairs, best first
    pub top_sustainable: Vec<(String, f64)>,
    /// Up to 10 (product_id, score) pairs, worst first
    pub least_sustainable: Vec<(String, f64)>,
    pub category_stats: Vec<CategoryStats>,
    pub factor_stats: Vec<FactorStats>,
}
