// tests/pipeline.rs
// End-to-end run over generated sample data

use retail_analytics::config::{Config, SampleConfig};
use retail_analytics::domain::service::{DemandForecastService, SustainabilityService};
use retail_analytics::infrastructure::dataset::{sample_sales, sample_sustainability};
use retail_analytics::infrastructure::forecast::DemandForecastModel;
use retail_analytics::infrastructure::sustainability::SustainabilityModel;

fn sample_config() -> SampleConfig {
    SampleConfig {
        products: 5,
        days: 365,
        seed: 42,
    }
}

#[test]
fn sample_data_trains_forecasts_and_scores() {
    let config = sample_config();
    let sales = sample_sales(&config);
    let sustainability = sample_sustainability(&config);

    // Train and forecast
    let mut forecaster = DemandForecastModel::new(10, 10, 42);
    assert!(!forecaster.is_trained());

    let report = forecaster.train(&sales).unwrap();
    assert!(report.samples > 0);
    assert!(report.samples <= sales.len());
    assert!(forecaster.is_trained());

    let horizon = 30;
    let predictions = forecaster.predict(&sales, horizon).unwrap();

    let distinct_products = {
        let mut ids: Vec<&str> = sales.iter().map(|r| r.product_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    };
    assert_eq!(predictions.len(), horizon as usize * distinct_products);

    for row in &predictions {
        assert!(row.predicted_quantity >= 0.0);
        let cents = row.predicted_quantity * 100.0;
        assert!((cents - cents.round()).abs() < 1e-9);
    }

    // Score and benchmark the same catalog
    let scorer = SustainabilityModel::new();
    let scored = scorer.score(&sustainability).unwrap();
    assert_eq!(scored.len(), sustainability.len());
    for product in &scored {
        assert!(product.score >= 0.0 && product.score <= 100.0);
    }

    let benchmark = scorer.benchmark(&sustainability, None).unwrap();
    assert_eq!(benchmark.len(), scored.len());
    assert!(benchmark.iter().any(|e| e.rank == 1));

    // Every scored product has an improvement report
    for product in &scored {
        let report = scorer.improvements(&sustainability, &product.product_id).unwrap();
        assert_eq!(report.product_id, product.product_id);
    }
}

#[test]
fn default_sample_data_is_trainable() {
    // The demo binary trains on Config::default() sample data; every
    // product must carry enough history to survive feature filtering
    let config = Config::default();
    let sales = sample_sales(&config.sample);
    assert_eq!(sales.len(), config.sample.products * config.sample.days);

    let mut forecaster = DemandForecastModel::new(5, 8, config.forecast.seed);
    let report = forecaster.train(&sales).unwrap();

    // Each product loses only the rows inside the 30-day warmup window
    let expected = config.sample.products * (config.sample.days - 30);
    assert_eq!(report.samples, expected);

    let forecast = forecaster.predict(&sales, 7).unwrap();
    assert_eq!(forecast.len(), 7 * config.sample.products);
}

#[test]
fn forecasts_are_reproducible_for_a_fixed_seed() {
    let config = sample_config();
    let sales = sample_sales(&config);

    let mut a = DemandForecastModel::new(10, 10, 42);
    let mut b = DemandForecastModel::new(10, 10, 42);
    a.train(&sales).unwrap();
    b.train(&sales).unwrap();

    let pa = a.predict(&sales, 14).unwrap();
    let pb = b.predict(&sales, 14).unwrap();
    assert_eq!(pa.len(), pb.len());
    for (x, y) in pa.iter().zip(pb.iter()) {
        assert_eq!(x.product_id, y.product_id);
        assert_eq!(x.date, y.date);
        assert_eq!(x.predicted_quantity, y.predicted_quantity);
    }
}
