//! Observability module for structured logging and metrics.
//!
//! This module provides:
//! - Structured logging with configurable levels and formats
//! - Extraction and reminder metrics through the `metrics` facade

pub mod metrics;
pub mod tracing_mod;

use anyhow::Result;

use crate::observability_config::ObservabilityConfig;

pub use tracing_mod::scan_span;

/// Initialize observability from environment variables
pub fn init_observability() -> Result<()> {
    init_observability_with_config(&ObservabilityConfig::from_env())
}

/// Initialize observability with an explicit configuration
pub fn init_observability_with_config(config: &ObservabilityConfig) -> Result<()> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid observability configuration: {}", e))?;

    tracing_mod::init_tracing_with_config(config)
}
