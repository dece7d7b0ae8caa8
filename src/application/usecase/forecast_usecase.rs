// src/application/usecase/forecast_usecase.rs
// Demand forecasting use cases

use crate::application::dto::{ApplicationError, ForecastResponse, PredictionDto, TrainResponse};
use crate::domain::model::{DemandAnalysis, SalesRecord};
use crate::domain::service::DemandForecastService;

/// Demand forecasting use case
pub trait DemandForecastUseCase {
    /// Refit the underlying model; the caller decides when to train
    fn train(&mut self, records: &[SalesRecord]) -> Result<TrainResponse, ApplicationError>;

    fn forecast(
        &self,
        records: &[SalesRecord],
        days: u32,
    ) -> Result<ForecastResponse, ApplicationError>;

    fn analyze(&self, records: &[SalesRecord]) -> DemandAnalysis;

    fn is_trained(&self) -> bool;
}

pub struct DemandForecastProcessor {
    forecast_service: Box<dyn DemandForecastService>,
}

impl DemandForecastProcessor {
    pub fn new(forecast_service: Box<dyn DemandForecastService>) -> Self {
        Self { forecast_service }
    }
}

impl DemandForecastUseCase for DemandForecastProcessor {
    fn train(&mut self, records: &[SalesRecord]) -> Result<TrainResponse, ApplicationError> {
        let report = self
            .forecast_service
            .train(records)
            .map_err(|e| ApplicationError::DomainError(e.to_string()))?;

        Ok(TrainResponse::from(report))
    }

    fn forecast(
        &self,
        records: &[SalesRecord],
        days: u32,
    ) -> Result<ForecastResponse, ApplicationError> {
        let predictions = self
            .forecast_service
            .predict(records, days)
            .map_err(|e| ApplicationError::DomainError(e.to_string()))?;

        Ok(ForecastResponse {
            predictions: predictions.into_iter().map(PredictionDto::from).collect(),
            forecast_days: days,
        })
    }

    fn analyze(&self, records: &[SalesRecord]) -> DemandAnalysis {
        self.forecast_service.analyze(records)
    }

    fn is_trained(&self) -> bool {
        self.forecast_service.is_trained()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dataset::sample_sales;
    use crate::infrastructure::forecast::DemandForecastModel;
    use crate::config::SampleConfig;

    fn processor() -> DemandForecastProcessor {
        DemandForecastProcessor::new(Box::new(DemandForecastModel::new(5, 8, 42)))
    }

    fn records() -> Vec<crate::domain::model::SalesRecord> {
        // 200 days over 3 products gives every product a full lag window
        sample_sales(&SampleConfig {
            products: 3,
            days: 200,
            seed: 42,
        })
    }

    #[test]
    fn forecast_before_train_is_a_domain_error() {
        let processor = processor();
        let err = processor.forecast(&records(), 5).unwrap_err();
        assert!(matches!(err, ApplicationError::DomainError(_)));
    }

    #[test]
    fn train_then_forecast_produces_dtos() {
        let mut processor = processor();
        let records = records();

        let response = processor.train(&records).unwrap();
        assert_eq!(response.status, "trained");
        assert!(response.samples > 0);
        assert!(processor.is_trained());

        let forecast = processor.forecast(&records, 5).unwrap();
        assert_eq!(forecast.forecast_days, 5);
        assert_eq!(forecast.predictions.len(), 5 * 3);
        assert!(forecast.predictions[0].date.starts_with("2024-"));
    }
}
