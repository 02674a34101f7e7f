//! # Unified Application Configuration
//!
//! This module consolidates all settings into a single configuration object
//! loaded from environment variables and validated at startup.

use crate::errors::{AppError, AppResult};
use crate::observability_config::ObservabilityConfig;
use crate::text_processing::ExtractionConfig;
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub extraction: ExtractionConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; malformed numbers are errors.
    pub fn from_env() -> AppResult<Self> {
        let defaults = ExtractionConfig::default();

        let min_name_length = parse_env_var(
            "EXTRACTION_MIN_NAME_LENGTH",
            defaults.min_name_length,
        )?;

        let rejected_name_fragments = match env::var("EXTRACTION_REJECTED_FRAGMENTS") {
            Ok(raw) => parse_fragment_list(&raw),
            Err(_) => defaults.rejected_name_fragments,
        };

        Ok(Self {
            extraction: ExtractionConfig {
                min_name_length,
                rejected_name_fragments,
            },
            observability: ObservabilityConfig::from_env(),
        })
    }

    /// Validate every configuration section
    pub fn validate(&self) -> AppResult<()> {
        self.extraction.validate()?;
        self.observability
            .validate()
            .map_err(AppError::Config)?;
        Ok(())
    }
}

/// Split a comma-separated fragment list, dropping blank entries
pub fn parse_fragment_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_env_var<T: std::str::FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(value) => value.trim().parse::<T>().map_err(|_| {
            AppError::Config(format!("{} must be a valid number, got '{}'", key, value))
        }),
        Err(_) => Ok(default),
    }
}
