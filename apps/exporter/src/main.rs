//! Build results exporter - Main entry point.
//!
//! Reads a build's raw test data, normalizes it and writes the canonical
//! build record.

use build_results_lib::config::Config;
use build_results_lib::services::{JsonFileSink, JsonFileSource, export_build};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Check for --health-check flag: only verify the configuration loads
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(if Config::from_env().is_ok() { 0 } else { 1 });
    }

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - BRX_BUILD_ID, BRX_JOB_NAME and BRX_PLATFORM must be set");
            error!("  - In production, BRX_BUILD_DATA_PATH must not use the development default");
            std::process::exit(1);
        }
    };

    info!("Environment: {}", config.environment);
    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let source = JsonFileSource::new(config.build_data_path.clone());
    let sink = JsonFileSink::new(config.output_path.clone());

    match export_build(&config.export_job(), &source, &sink).await {
        Ok(record) => info!(
            "Build {} exported with status {}",
            record.build_id,
            record.status.as_deref().unwrap_or_default()
        ),
        Err(e) => {
            error!("Export of build {} failed: {}", config.build_id, e);
            std::process::exit(1);
        }
    }
}
