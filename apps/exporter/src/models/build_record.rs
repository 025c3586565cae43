//! Canonical per-build document handed to persistence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::aggregation::AggregationResult;
use super::test_result::Test;
use super::test_suite::Suite;

/// Job metadata plus the normalized results of one build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildRecord {
    pub job_name: String,
    pub job_link: String,
    pub build_date_time: String,
    pub build_id: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Free-form job description (the upstream build version)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_info: Option<String>,
    /// Canonical status name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub tests: Vec<Test>,
    pub suites: Vec<Suite>,
    /// Arbitrary metadata attached by the caller
    pub meta: Map<String, JsonValue>,
}

impl BuildRecord {
    /// Create a record with job metadata and no results yet.
    pub fn create(
        job_name: impl Into<String>,
        job_link: impl Into<String>,
        build_date_time: impl Into<String>,
        build_id: impl Into<String>,
        platform: impl Into<String>,
        product: Option<String>,
        job_info: Option<String>,
    ) -> Self {
        BuildRecord {
            job_name: job_name.into(),
            job_link: job_link.into(),
            build_date_time: build_date_time.into(),
            build_id: build_id.into(),
            platform: platform.into(),
            product,
            job_info,
            ..Default::default()
        }
    }

    /// Attach aggregated tests and suites.
    pub fn store_tests(&mut self, results: AggregationResult) {
        self.tests = results.tests;
        self.suites = results.suites;
    }

    /// Attach the canonical status name.
    pub fn store_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}
