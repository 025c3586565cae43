//! Canonical per-test record.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Outcome of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestResult {
    Passed,
    Failed,
    Skipped,
}

impl TestResult {
    /// Parse the upstream per-test token. Only the exact upstream vocabulary is accepted.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "PASSED" => Ok(Self::Passed),
            "FAILED" => Ok(Self::Failed),
            "SKIPPED" => Ok(Self::Skipped),
            other => Err(AppError::UnknownTestResult(other.to_string())),
        }
    }
}

/// One executed test, normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    /// Suite name (same as classname)
    pub suite: String,
    pub classname: String,
    /// Test name
    pub test: String,
    pub result: TestResult,
    /// Error text, empty when the test produced none
    pub message: String,
    /// Duration as reported upstream, zero when malformed
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    /// Report set the record came from
    pub reportset: String,
}

// Whole durations are written as integers (`123`, not `123.0`).
pub(crate) fn serialize_duration<S>(duration: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if duration.fract() == 0.0 && *duration >= 0.0 && *duration < u64::MAX as f64 {
        serializer.serialize_u64(*duration as u64)
    } else {
        serializer.serialize_f64(*duration)
    }
}
