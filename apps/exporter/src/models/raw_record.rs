//! Raw test records as exported by the upstream build system.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single test record in upstream shape. Every field may be missing or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTestRecord {
    #[serde(default)]
    pub test_name: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    /// Anything the upstream put here; see [`RawTestRecord::duration`]
    #[serde(default)]
    pub duration: Option<JsonValue>,
    #[serde(default)]
    pub package_name: Option<String>,
    /// Expected to be PASSED, FAILED or SKIPPED
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub report_set: Option<String>,
}

impl RawTestRecord {
    /// Duration if it is a finite, non-negative number (or a numeric string).
    pub fn duration(&self) -> Option<f64> {
        let value = match self.duration.as_ref()? {
            JsonValue::Number(n) => n.as_f64()?,
            JsonValue::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };

        (value.is_finite() && value >= 0.0).then_some(value)
    }
}

/// Records belonging to one named report set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSet {
    pub name: String,
    pub records: Vec<RawTestRecord>,
}

impl ReportSet {
    pub fn new(name: impl Into<String>, records: Vec<RawTestRecord>) -> Self {
        ReportSet {
            name: name.into(),
            records,
        }
    }
}
