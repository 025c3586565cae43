//! Domain error types for the build results exporter.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Build-level status token not present in the alias table
    #[error("Unknown build status: '{0}'")]
    UnknownStatus(String),

    /// Per-test status token outside PASSED/FAILED/SKIPPED
    #[error("Unknown test result: '{0}'")]
    UnknownTestResult(String),

    /// Aggregation was handed zero test records
    #[error("No test data found in any report set")]
    NoTestData,

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream build data could not be fetched
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Reading or writing a local file failed
    #[error("File system error: {0}")]
    FileSystem(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

// Conversion implementations for common error types

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileSystem(err.to_string())
    }
}
