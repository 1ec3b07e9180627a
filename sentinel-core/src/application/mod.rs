// sentinel-core/src/application/mod.rs

pub mod audit;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do `use sentinel_core::application::{run_audit, ...};`
// without knowing the internal file layout.

pub use audit::{build_library, parse_request, run_audit};
