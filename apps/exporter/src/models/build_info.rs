//! Upstream build-level information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Build metadata as returned by the upstream build system.
///
/// Only `build_status` is interpreted; the remaining fields pass through into
/// the exported record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildInfo {
    #[serde(default)]
    pub build_id: Option<String>,
    /// Passed through verbatim, in whatever form the upstream sent it
    #[serde(default)]
    pub build_date_time_utc: Option<String>,
    /// Free-form status token, see [`crate::models::BuildStatus::classify`]
    #[serde(default)]
    pub build_status: Option<String>,
    #[serde(default)]
    pub build_version: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub build_url: Option<String>,
    /// Unrecognized keys
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl BuildInfo {
    /// Build info carrying only an id and status.
    pub fn with_status(build_id: impl Into<String>, status: impl Into<String>) -> Self {
        BuildInfo {
            build_id: Some(build_id.into()),
            build_status: Some(status.into()),
            ..Default::default()
        }
    }
}
