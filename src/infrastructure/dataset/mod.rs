// src/infrastructure/dataset/mod.rs
// CSV ingestion and deterministic sample-data generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::SampleConfig;
use crate::domain::errors::{DatasetError, DatasetResult};
use crate::domain::model::{SalesRecord, SustainabilityRecord};

const CATEGORIES: [&str; 5] = ["Electronics", "Clothing", "Home", "Sports", "Books"];

/// Read the four-column sales schema (product_id, date, quantity, price).
///
/// Malformed rows are skipped with a warning; an input that yields no
/// valid rows while containing data is an error.
pub fn load_sales_csv<R: Read>(reader: R) -> DatasetResult<Vec<SalesRecord>> {
    read_rows(reader)
}

/// Read the sustainability schema (product_id, category, six factor
/// columns; blank factor cells mean missing)
pub fn load_sustainability_csv<R: Read>(reader: R) -> DatasetResult<Vec<SustainabilityRecord>> {
    read_rows(reader)
}

/// Load sales records from a CSV file on disk
pub fn load_sales_csv_path<P: AsRef<Path>>(path: P) -> DatasetResult<Vec<SalesRecord>> {
    let file = File::open(path)?;
    load_sales_csv(file)
}

/// Load sustainability records from a CSV file on disk
pub fn load_sustainability_csv_path<P: AsRef<Path>>(
    path: P,
) -> DatasetResult<Vec<SustainabilityRecord>> {
    let file = File::open(path)?;
    load_sustainability_csv(file)
}

fn read_rows<R: Read, T: serde::de::DeserializeOwned>(reader: R) -> DatasetResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (line, result) in csv_reader.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                log::warn!("Skipping CSV row {}: {}", line + 2, e);
            }
        }
    }

    if rows.is_empty() && skipped > 0 {
        return Err(DatasetError::Csv(format!(
            "no valid rows ({} skipped); check the column schema",
            skipped
        )));
    }

    Ok(rows)
}

/// Generate a deterministic sales table: one record per product per day
/// starting 2024-01-01, so every product carries a full lag history once
/// `days` exceeds the long feature window
pub fn sample_sales(config: &SampleConfig) -> Vec<SalesRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let products = product_ids(config.products);
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut records = Vec::with_capacity(config.days * products.len());
    for i in 0..config.days {
        let date = start + chrono::Duration::days(i as i64);
        for product_id in &products {
            records.push(SalesRecord {
                product_id: product_id.clone(),
                date,
                quantity: rng.gen_range(1..=20),
                price: rng.gen_range(10.0..100.0),
            });
        }
    }
    records
}

/// Generate one sustainability row per product with fully populated factors
pub fn sample_sustainability(config: &SampleConfig) -> Vec<SustainabilityRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    product_ids(config.products)
        .into_iter()
        .map(|product_id| SustainabilityRecord {
            product_id,
            category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
            carbon_footprint: Some(rng.gen_range(0.5..5.0)),
            recyclability: Some(rng.gen_range(0.0..100.0)),
            packaging_score: Some(rng.gen_range(0.0..100.0)),
            sourcing_score: Some(rng.gen_range(0.0..100.0)),
            durability: Some(rng.gen_range(1.0..10.0)),
            end_of_life_score: Some(rng.gen_range(0.0..100.0)),
        })
        .collect()
}

fn product_ids(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("PROD{:03}", i)).collect()
}
