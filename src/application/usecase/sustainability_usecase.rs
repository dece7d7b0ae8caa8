// src/application/usecase/sustainability_usecase.rs
// Sustainability scoring use cases

use crate::application::dto::{ApplicationError, BenchmarkDto, ScoredProductDto};
use crate::domain::model::{ImprovementReport, SustainabilityAnalysis, SustainabilityRecord};
use crate::domain::service::SustainabilityService;

/// Sustainability scoring use case
pub trait SustainabilityUseCase {
    fn score(
        &self,
        records: &[SustainabilityRecord],
    ) -> Result<Vec<ScoredProductDto>, ApplicationError>;

    fn analyze(
        &self,
        records: &[SustainabilityRecord],
    ) -> Result<SustainabilityAnalysis, ApplicationError>;

    fn benchmark(
        &self,
        records: &[SustainabilityRecord],
        category: Option<&str>,
    ) -> Result<Vec<BenchmarkDto>, ApplicationError>;

    fn improvements(
        &self,
        records: &[SustainabilityRecord],
        product_id: &str,
    ) -> Result<ImprovementReport, ApplicationError>;
}

pub struct SustainabilityProcessor {
    scoring_service: Box<dyn SustainabilityService>,
}

impl SustainabilityProcessor {
    pub fn new(scoring_service: Box<dyn SustainabilityService>) -> Self {
        Self { scoring_service }
    }
}

impl SustainabilityUseCase for SustainabilityProcessor {
    fn score(
        &self,
        records: &[SustainabilityRecord],
    ) -> Result<Vec<ScoredProductDto>, ApplicationError> {
        let scored = self
            .scoring_service
            .score(records)
            .map_err(|e| ApplicationError::DomainError(e.to_string()))?;

        Ok(scored.into_iter().map(ScoredProductDto::from).collect())
    }

    fn analyze(
        &self,
        records: &[SustainabilityRecord],
    ) -> Result<SustainabilityAnalysis, ApplicationError> {
        self.scoring_service
            .analyze(records)
            .map_err(|e| ApplicationError::DomainError(e.to_string()))
    }

    fn benchmark(
        &self,
        records: &[SustainabilityRecord],
        category: Option<&str>,
    ) -> Result<Vec<BenchmarkDto>, ApplicationError> {
        let entries = self
            .scoring_service
            .benchmark(records, category)
            .map_err(|e| ApplicationError::DomainError(e.to_string()))?;

        Ok(entries.into_iter().map(BenchmarkDto::from).collect())
    }

    fn improvements(
        &self,
        records: &[SustainabilityRecord],
        product_id: &str,
    ) -> Result<ImprovementReport, ApplicationError> {
        self.scoring_service
            .improvements(records, product_id)
            .map_err(|e| ApplicationError::DomainError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SampleConfig;
    use crate::infrastructure::dataset::sample_sustainability;
    use crate::infrastructure::sustainability::SustainabilityModel;

    fn processor() -> SustainabilityProcessor {
        SustainabilityProcessor::new(Box::new(SustainabilityModel::new()))
    }

    fn records() -> Vec<SustainabilityRecord> {
        sample_sustainability(&SampleConfig {
            products: 20,
            days: 100,
            seed: 42,
        })
    }

    #[test]
    fn score_returns_one_dto_per_product() {
        let dtos = processor().score(&records()).unwrap();
        assert_eq!(dtos.len(), 20);
        for dto in &dtos {
            assert!(dto.sustainability_score >= 0.0 && dto.sustainability_score <= 100.0);
        }
    }

    #[test]
    fn improvements_for_unknown_product_is_a_domain_error() {
        let err = processor().improvements(&records(), "MISSING").unwrap_err();
        assert!(matches!(err, ApplicationError::DomainError(_)));
    }

    #[test]
    fn benchmark_covers_the_snapshot() {
        let entries = processor().benchmark(&records(), None).unwrap();
        assert_eq!(entries.len(), 20);
        assert!(entries.iter().any(|e| e.rank == 1));
        for entry in &entries {
            assert!(!entry.sustainability_level.is_empty());
            assert!(entry.percentile > 0.0 && entry.percentile <= 100.0);
        }
    }
}
