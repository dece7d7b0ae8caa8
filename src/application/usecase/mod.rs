// src/application/usecase/mod.rs

pub mod forecast_usecase;
pub mod sustainability_usecase;

// Re-export public API
pub use forecast_usecase::{DemandForecastProcessor, DemandForecastUseCase};
pub use sustainability_usecase::{SustainabilityProcessor, SustainabilityUseCase};
