//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::services::ExportJob;

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_BUILD_DATA_PATH: &str = "build-data.json";
    pub const DEFAULT_REPORT_SET: &str = "Default Report Set";
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Build to export
    pub build_id: String,
    /// Job name recorded with the build
    pub job_name: String,
    /// Platform the build ran on
    pub platform: String,
    /// Product passed to the build info lookup
    pub product: Option<String>,
    /// Stage passed to the build info lookup
    pub stage: Option<String>,
    /// Report sets to fetch, in order
    pub report_sets: Vec<String>,
    /// JSON export file the build data is read from
    pub build_data_path: PathBuf,
    /// Where the build record is written (stdout when unset)
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `BRX_BUILD_ID`: Build identifier - REQUIRED
    /// - `BRX_JOB_NAME`: Job name - REQUIRED
    /// - `BRX_PLATFORM`: Platform name - REQUIRED
    /// - `BRX_PRODUCT`: Product name (optional)
    /// - `BRX_STAGE`: Build stage (optional)
    /// - `BRX_REPORT_SETS`: Comma-separated report set names (default: "Default Report Set")
    /// - `BRX_BUILD_DATA_PATH`: Build data export file (default: build-data.json)
    /// - `BRX_OUTPUT_PATH`: Output file for the build record (default: stdout)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Parse environment - required
        let env_str = lookup("RUST_ENV").ok_or(ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingEnvVar(key))
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let build_id = required("BRX_BUILD_ID")?;
        let job_name = required("BRX_JOB_NAME")?;
        let platform = required("BRX_PLATFORM")?;

        let report_sets = parse_report_sets(
            &optional("BRX_REPORT_SETS").unwrap_or_else(|| defaults::DEFAULT_REPORT_SET.to_string()),
        );
        if report_sets.is_empty() {
            return Err(ConfigError::InvalidValue(
                "BRX_REPORT_SETS must name at least one report set",
            ));
        }

        let build_data_path = optional("BRX_BUILD_DATA_PATH")
            .unwrap_or_else(|| defaults::DEV_BUILD_DATA_PATH.to_string())
            .into();

        let config = Config {
            environment,
            build_id,
            job_name,
            platform,
            product: optional("BRX_PRODUCT"),
            stage: optional("BRX_STAGE"),
            report_sets,
            build_data_path,
            output_path: optional("BRX_OUTPUT_PATH").map(PathBuf::from),
        };

        // Validate production configuration
        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.build_data_path == PathBuf::from(defaults::DEV_BUILD_DATA_PATH) {
            errors.push(format!(
                "BRX_BUILD_DATA_PATH is using development default '{}'. Set the export file path.",
                defaults::DEV_BUILD_DATA_PATH
            ));
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// The export job described by this configuration.
    pub fn export_job(&self) -> ExportJob {
        ExportJob {
            build_id: self.build_id.clone(),
            job_name: self.job_name.clone(),
            platform: self.platform.clone(),
            product: self.product.clone(),
            stage: self.stage.clone(),
            report_sets: self.report_sets.clone(),
        }
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

fn parse_report_sets(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
