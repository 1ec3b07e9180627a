// sentinel-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentinelError {
    // --- DOMAIN ERRORS (rule library, audit preconditions) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- BOUNDARY VALIDATION (schema-level, pre-core) ---
    #[error("Schema Validation Failed")]
    Validation { details: Vec<String> },

    // --- GENERIC / APPLICATIVE ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementation to avoid a duplicate enum variant but keep ergonomics
impl From<std::io::Error> for SentinelError {
    fn from(err: std::io::Error) -> Self {
        SentinelError::Infrastructure(InfrastructureError::Io(err))
    }
}
