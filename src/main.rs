// src/main.rs
use retail_analytics::application::usecase::{
    DemandForecastProcessor, DemandForecastUseCase, SustainabilityProcessor,
    SustainabilityUseCase,
};
use retail_analytics::config::Config;
use retail_analytics::domain::errors::AppResult;
use retail_analytics::infrastructure::dataset::{sample_sales, sample_sustainability};
use retail_analytics::infrastructure::forecast::DemandForecastModel;
use retail_analytics::infrastructure::sustainability::SustainabilityModel;

fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting retail_analytics v{}", env!("CARGO_PKG_VERSION"));

    // Generate demo datasets
    let sales = sample_sales(&config.sample);
    let sustainability = sample_sustainability(&config.sample);
    log::info!(
        "Generated {} sales records across {} products",
        sales.len(),
        config.sample.products
    );

    // Demand forecasting
    let model = DemandForecastModel::new(
        config.forecast.tree_count,
        config.forecast.max_depth,
        config.forecast.seed,
    );
    let mut forecaster = DemandForecastProcessor::new(Box::new(model));

    let report = forecaster
        .train(&sales)
        .map_err(|e| e.to_string())?;
    log::info!("Training complete: {} samples", report.samples);

    let forecast = forecaster
        .forecast(&sales, config.forecast.horizon_days)
        .map_err(|e| e.to_string())?;
    log::info!(
        "Forecast: {} rows over {} days",
        forecast.predictions.len(),
        forecast.forecast_days
    );
    for prediction in forecast.predictions.iter().take(5) {
        log::info!(
            "  {} {} -> {}",
            prediction.product_id,
            prediction.date,
            prediction.predicted_quantity
        );
    }

    let demand = forecaster.analyze(&sales);
    log::info!(
        "Demand analysis: {} orders, {} products, daily avg {:.2}",
        demand.total_orders,
        demand.unique_products,
        demand.daily_avg
    );

    // Sustainability scoring
    let scorer = SustainabilityProcessor::new(Box::new(SustainabilityModel::new()));

    let scored = scorer.score(&sustainability).map_err(|e| e.to_string())?;
    log::info!("Scored {} products", scored.len());

    let benchmark = scorer
        .benchmark(&sustainability, None)
        .map_err(|e| e.to_string())?;
    if let Some(best) = benchmark.iter().find(|e| e.rank == 1) {
        log::info!(
            "Top product: {} (score {}, {:.1}th percentile)",
            best.product_id,
            best.sustainability_score,
            best.percentile
        );

        let report = scorer
            .improvements(&sustainability, &best.product_id)
            .map_err(|e| e.to_string())?;
        log::info!(
            "{} still trails the average on {} factors",
            report.product_id,
            report.suggestions.len()
        );
    }

    Ok(())
}
