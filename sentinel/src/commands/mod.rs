// sentinel/src/commands/mod.rs

pub mod audit;
pub mod rules;
