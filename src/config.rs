// src/config.rs
use crate::domain::errors::{AppError, AppResult};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Retail analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Demand forecasting configuration
    pub forecast: ForecastConfig,

    /// Sample data generation configuration
    pub sample: SampleConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Demand forecasting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of trees in the regression forest
    pub tree_count: usize,

    /// Random seed for reproducible fitting
    pub seed: u64,

    /// Maximum depth of each regression tree
    pub max_depth: usize,

    /// Default forecast horizon in days
    pub horizon_days: u32,
}

/// Sample data generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of distinct products to generate
    pub products: usize,

    /// Number of consecutive sales days to generate
    pub days: usize,

    /// Random seed for reproducible sample data
    pub seed: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,

    /// Log to file
    pub to_file: bool,

    /// Log file path
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let forecast_config = ForecastConfig {
            tree_count: env::var("FORECAST_TREE_COUNT")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .unwrap_or(50),
            seed: env::var("FORECAST_SEED")
                .unwrap_or_else(|_| "42".to_string())
                .parse()
                .unwrap_or(42),
            max_depth: env::var("FORECAST_MAX_DEPTH")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .unwrap_or(12),
            horizon_days: env::var("FORECAST_HORIZON_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        };

        let sample_config = SampleConfig {
            products: env::var("SAMPLE_PRODUCTS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap_or(20),
            days: env::var("SAMPLE_DAYS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
            seed: env::var("SAMPLE_SEED")
                .unwrap_or_else(|_| "42".to_string())
                .parse()
                .unwrap_or(42),
        };

        let logging_config = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            to_file: env::var("LOG_TO_FILE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            file_path: env::var("LOG_FILE_PATH").ok(),
        };

        Ok(Config {
            forecast: forecast_config,
            sample: sample_config,
            logging: logging_config,
        })
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(path)
            .map_err(|e| AppError::Config(format!("Failed to open config file: {}", e)))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();

        // Set log level
        let log_level = match self.logging.level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        builder.filter_level(log_level);

        // Configure output
        if self.logging.to_file {
            if let Some(file_path) = &self.logging.file_path {
                let file = File::create(file_path)
                    .map_err(|e| AppError::Config(format!("Failed to create log file: {}", e)))?;

                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }

        // Initialize the logger
        builder.init();

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forecast: ForecastConfig {
                tree_count: 50,
                seed: 42,
                max_depth: 12,
                horizon_days: 30,
            },
            sample: SampleConfig {
                products: 20,
                days: 100,
                seed: 42,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                to_file: false,
                file_path: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_forecast_parameters() {
        let config = Config::default();
        assert_eq!(config.forecast.tree_count, 50);
        assert_eq!(config.forecast.seed, 42);
        assert_eq!(config.forecast.horizon_days, 30);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sample.products, config.sample.products);
        assert_eq!(parsed.logging.level, config.logging.level);
    }
}
