// src/application/mod.rs
// Application layer: use cases and response DTOs

pub mod dto;
pub mod usecase;
