// src/infrastructure/sustainability/mod.rs
// Weighted composite sustainability scoring over a product snapshot

use std::collections::{BTreeMap, HashMap};

use crate::domain::errors::{SustainabilityError, SustainabilityResult};
use crate::domain::model::{
    BenchmarkEntry, CategoryStats, Factor, FactorStats, ImprovementReport,
    ImprovementSuggestion, ScoredProduct, SustainabilityAnalysis, SustainabilityLevel,
    SustainabilityRecord,
};
use crate::domain::service::SustainabilityService;

/// Factor weights; they sum to 1.0
pub const WEIGHTS: [(Factor, f64); 6] = [
    (Factor::CarbonFootprint, 0.25),
    (Factor::Recyclability, 0.20),
    (Factor::PackagingScore, 0.15),
    (Factor::SourcingScore, 0.20),
    (Factor::Durability, 0.10),
    (Factor::EndOfLifeScore, 0.10),
];

const LEVEL_ORDER: [SustainabilityLevel; 4] = [
    SustainabilityLevel::Excellent,
    SustainabilityLevel::Good,
    SustainabilityLevel::Fair,
    SustainabilityLevel::Poor,
];

/// Sustainability scorer. Stateless: every operation is a pure function
/// of the full snapshot table (min/max/mean normalization needs the whole
/// dataset present).
#[derive(Debug, Clone, Default)]
pub struct SustainabilityModel;

impl SustainabilityModel {
    pub fn new() -> Self {
        Self
    }

    /// Impute missing factors (category mean, then global mean, then 0)
    /// and invert carbon footprint so lower raw values contribute more.
    /// Returns one row of factor values per record, factor-indexed.
    fn prepare(&self, records: &[SustainabilityRecord]) -> Vec<[f64; 6]> {
        let mut prepared = vec![[0.0; 6]; records.len()];

        for (f, (factor, _)) in WEIGHTS.iter().enumerate() {
            let mut category_sums: HashMap<&str, (f64, usize)> = HashMap::new();
            let mut global_sum = 0.0;
            let mut global_count = 0usize;

            for record in records {
                if let Some(value) = factor_value(record, *factor) {
                    let entry = category_sums.entry(record.category.as_str()).or_insert((0.0, 0));
                    entry.0 += value;
                    entry.1 += 1;
                    global_sum += value;
                    global_count += 1;
                }
            }

            let global_mean = if global_count > 0 {
                global_sum / global_count as f64
            } else {
                0.0
            };

            for (row, record) in prepared.iter_mut().zip(records.iter()) {
                let value = factor_value(record, *factor).unwrap_or_else(|| {
                    category_sums
                        .get(record.category.as_str())
                        .filter(|(_, count)| *count > 0)
                        .map(|(sum, count)| sum / *count as f64)
                        .unwrap_or(global_mean)
                });

                row[f] = if *factor == Factor::CarbonFootprint {
                    1.0 / (1.0 + value)
                } else {
                    value
                };
            }
        }

        prepared
    }

    /// Composite scores from a prepared matrix
    fn composite_scores(&self, prepared: &[[f64; 6]]) -> Vec<f64> {
        let mut scores = vec![0.0; prepared.len()];

        for (f, (_, weight)) in WEIGHTS.iter().enumerate() {
            let min = prepared.iter().map(|r| r[f]).fold(f64::INFINITY, f64::min);
            let max = prepared
                .iter()
                .map(|r| r[f])
                .fold(f64::NEG_INFINITY, f64::max);
            let span = max - min;

            for (score, row) in scores.iter_mut().zip(prepared.iter()) {
                // A constant column is defined to contribute nothing
                let normalized = if span > 0.0 { (row[f] - min) / span } else { 0.0 };
                *score += normalized * weight;
            }
        }

        scores.iter().map(|s| round2(s * 100.0)).collect()
    }
}

impl SustainabilityService for SustainabilityModel {
    fn score(&self, records: &[SustainabilityRecord]) -> SustainabilityResult<Vec<ScoredProduct>> {
        let prepared = self.prepare(records);
        let scores = self.composite_scores(&prepared);

        Ok(records
            .iter()
            .zip(scores)
            .map(|(record, score)| ScoredProduct {
                product_id: record.product_id.clone(),
                category: record.category.clone(),
                score,
                level: SustainabilityLevel::from_score(score),
            })
            .collect())
    }

    fn analyze(
        &self,
        records: &[SustainabilityRecord],
    ) -> SustainabilityResult<SustainabilityAnalysis> {
        if records.is_empty() {
            return Err(SustainabilityError::EmptyDataset);
        }

        let scored = self.score(records)?;
        let prepared = self.prepare(records);

        let avg_score = scored.iter().map(|p| p.score).sum::<f64>() / scored.len() as f64;

        let mut counts: HashMap<SustainabilityLevel, usize> = HashMap::new();
        for product in &scored {
            *counts.entry(product.level).or_insert(0) += 1;
        }
        let score_distribution: Vec<(SustainabilityLevel, usize)> = LEVEL_ORDER
            .iter()
            .filter_map(|level| counts.get(level).map(|&count| (*level, count)))
            .collect();

        let mut by_score = scored.clone();
        by_score.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        let top_sustainable: Vec<(String, f64)> = by_score
            .iter()
            .take(10)
            .map(|p| (p.product_id.clone(), p.score))
            .collect();
        let least_sustainable: Vec<(String, f64)> = by_score
            .iter()
            .rev()
            .take(10)
            .map(|p| (p.product_id.clone(), p.score))
            .collect();

        let mut categories: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for product in &scored {
            let entry = categories.entry(product.category.as_str()).or_insert((0.0, 0));
            entry.0 += product.score;
            entry.1 += 1;
        }
        let category_stats: Vec<CategoryStats> = categories
            .into_iter()
            .map(|(category, (sum, count))| CategoryStats {
                category: category.to_string(),
                avg_score: round2(sum / count as f64),
                products: count,
            })
            .collect();

        let factor_stats: Vec<FactorStats> = WEIGHTS
            .iter()
            .enumerate()
            .map(|(f, (factor, weight))| FactorStats {
                factor: *factor,
                average: prepared.iter().map(|r| r[f]).sum::<f64>() / prepared.len() as f64,
                weight: *weight,
            })
            .collect();

        Ok(SustainabilityAnalysis {
            avg_score,
            score_distribution,
            top_sustainable,
            least_sustainable,
            category_stats,
            factor_stats,
        })
    }

    fn benchmark(
        &self,
        records: &[SustainabilityRecord],
        category: Option<&str>,
    ) -> SustainabilityResult<Vec<BenchmarkEntry>> {
        let mut scored = self.score(records)?;
        if let Some(category) = category {
            scored.retain(|p| p.category == category);
        }
        if scored.is_empty() {
            return Ok(Vec::new());
        }

        // Dense rank: tied scores share a rank, no gaps
        let mut distinct: Vec<f64> = scored.iter().map(|p| p.score).collect();
        distinct.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        distinct.dedup();

        let n = scored.len() as f64;
        let entries = scored
            .iter()
            .map(|product| {
                let rank = distinct
                    .iter()
                    .position(|&s| s == product.score)
                    .unwrap_or(0)
                    + 1;

                // Ascending percent rank with average tie handling
                let below = scored.iter().filter(|p| p.score < product.score).count() as f64;
                let ties = scored.iter().filter(|p| p.score == product.score).count() as f64;
                let percentile = (below + (ties + 1.0) / 2.0) / n * 100.0;

                BenchmarkEntry {
                    product_id: product.product_id.clone(),
                    score: product.score,
                    level: product.level,
                    rank,
                    percentile,
                }
            })
            .collect();

        Ok(entries)
    }

    fn improvements(
        &self,
        records: &[SustainabilityRecord],
        product_id: &str,
    ) -> SustainabilityResult<ImprovementReport> {
        let index = records
            .iter()
            .position(|r| r.product_id == product_id)
            .ok_or_else(|| SustainabilityError::ProductNotFound(product_id.to_string()))?;

        let scored = self.score(records)?;
        let prepared = self.prepare(records);

        let mut suggestions = Vec::new();
        for (f, (factor, weight)) in WEIGHTS.iter().enumerate() {
            let average = prepared.iter().map(|r| r[f]).sum::<f64>() / prepared.len() as f64;
            let current = prepared[index][f];

            if current < average {
                suggestions.push(ImprovementSuggestion {
                    factor: *factor,
                    current_value: current,
                    average_value: average,
                    improvement_potential: (average - current) * weight * 100.0,
                    advice: advice_for(*factor).to_string(),
                });
            }
        }

        Ok(ImprovementReport {
            product_id: product_id.to_string(),
            score: scored[index].score,
            level: scored[index].level,
            suggestions,
        })
    }
}

fn factor_value(record: &SustainabilityRecord, factor: Factor) -> Option<f64> {
    match factor {
        Factor::CarbonFootprint => record.carbon_footprint,
        Factor::Recyclability => record.recyclability,
        Factor::PackagingScore => record.packaging_score,
        Factor::SourcingScore => record.sourcing_score,
        Factor::Durability => record.durability,
        Factor::EndOfLifeScore => record.end_of_life_score,
    }
}

fn advice_for(factor: Factor) -> &'static str {
    match factor {
        Factor::CarbonFootprint => "Reduce carbon emissions through cleaner production methods",
        Factor::Recyclability => "Use more recyclable materials in product design",
        Factor::PackagingScore => "Adopt eco-friendly packaging materials",
        Factor::SourcingScore => "Source materials from sustainable suppliers",
        Factor::Durability => "Improve product quality to increase lifespan",
        Factor::EndOfLifeScore => "Design for easier disposal or recycling",
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
