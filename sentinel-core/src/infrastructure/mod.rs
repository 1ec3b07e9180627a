// sentinel-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
