// src/domain/mod.rs
// Domain layer: models, errors, and service interfaces

pub mod errors;
pub mod model;
pub mod service;
