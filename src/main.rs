use anyhow::{Context, Result};
use prescription_scan::config::AppConfig;
use prescription_scan::errors::error_logging;
use prescription_scan::input::InputSource;
use prescription_scan::observability;
use prescription_scan::text_processing::MedicineExtractor;
use prescription_scan::PrescriptionScan;
use std::env;
use tracing::{info, warn};

/// Load and validate configuration at startup
fn load_configuration() -> Result<AppConfig> {
    let config = AppConfig::from_env().map_err(|e| {
        error_logging::log_config_error(&e, "environment", "load");
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    config.validate().map_err(|e| {
        error_logging::log_config_error(&e, "environment", "validate");
        anyhow::anyhow!("Configuration validation failed: {}. Please check your configuration values.", e)
    })?;

    Ok(config)
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Subscriber first so configuration errors are logged
    observability::init_observability()?;
    let config = load_configuration()?;

    let arg = env::args().nth(1);
    let source = InputSource::from_arg(arg.as_deref());
    let _span = observability::scan_span(&source.describe()).entered();

    info!(source = %source.describe(), "Reading recognized text");
    let text = source
        .read_text()
        .with_context(|| format!("Failed to read recognized text from {}", source.describe()))?;

    let extractor = MedicineExtractor::with_config(config.extraction.clone())?;
    let scan = PrescriptionScan::from_text(&extractor, &text);

    if scan.is_empty() {
        warn!("No medicines detected; try a clearer image");
    } else {
        info!(medicines = scan.medicines.len(), "Prescription analyzed");
    }

    let output = serde_json::to_string_pretty(&scan).context("Failed to serialize scan result")?;
    println!("{}", output);

    Ok(())
}
