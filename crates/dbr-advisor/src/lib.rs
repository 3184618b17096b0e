//! Debt-burden ratio advisory calculators and the ambient plumbing (configuration,
//! telemetry, error mapping) shared by the CLI and HTTP surfaces.

pub mod calculators;
pub mod config;
pub mod error;
pub mod telemetry;
