// sentinel-core/src/domain/mod.rs

pub mod audit;
pub mod error;

// Convenient re-exports to simplify imports elsewhere
pub use error::DomainError;
