// src/domain/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),

    #[error("Sustainability error: {0}")]
    Sustainability(#[from] SustainabilityError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Implement From for common error types
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Unknown(s)
    }
}

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Model not trained: call train before predict")]
    ModelNotTrained,

    #[error("Invalid training data: {0}")]
    InvalidTrainingData(String),
}

#[derive(Error, Debug)]
pub enum SustainabilityError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Empty dataset: nothing to score")]
    EmptyDataset,
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type ForecastResult<T> = Result<T, ForecastError>;
pub type SustainabilityResult<T> = Result<T, SustainabilityError>;
pub type DatasetResult<T> = Result<T, DatasetError>;
