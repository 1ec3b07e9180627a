// sentinel-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Domain (business core)
// Rule library, matcher, auditor, scoring. Depends on nothing else.
pub mod domain;

// 2. Application (use cases)
// The validate-then-delegate audit pipeline. Depends on the Domain.
pub mod application;

// 3. Infrastructure (adapters)
// Rule-library file loading. Depends on the Domain.
pub mod infrastructure;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers import the main error easily: use sentinel_core::SentinelError;
pub use error::SentinelError;
