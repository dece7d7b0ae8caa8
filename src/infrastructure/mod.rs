// src/infrastructure/mod.rs
// Infrastructure layer: model implementations and data access

pub mod dataset;
pub mod forecast;
pub mod regression;
pub mod sustainability;
