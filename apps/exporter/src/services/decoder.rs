//! Decoding of upstream build results into canonical form.

use async_trait::async_trait;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{AggregationResult, BuildInfo, BuildStatus, ReportSet};
use crate::services::aggregation::aggregate;

/// Source of raw build data (the upstream build system or an export of it).
#[async_trait]
pub trait BuildDataSource: Send + Sync {
    /// Fetch raw test records for the given report sets, in the order requested.
    async fn fetch(&self, build_id: &str, report_sets: &[String]) -> AppResult<Vec<ReportSet>>;

    /// Fetch build-level information.
    async fn fetch_build_info(
        &self,
        build_id: &str,
        product: Option<&str>,
        stage: Option<&str>,
    ) -> AppResult<BuildInfo>;
}

/// Fetch and aggregate the test results of a build.
pub async fn decode(
    build_id: &str,
    report_sets: &[String],
    source: &dyn BuildDataSource,
) -> AppResult<AggregationResult> {
    decode_with_status(build_id, report_sets, source)
        .await
        .map(|(results, _)| results)
}

/// Like [`decode`], also returning the status derived from the test results.
pub async fn decode_with_status(
    build_id: &str,
    report_sets: &[String],
    source: &dyn BuildDataSource,
) -> AppResult<(AggregationResult, BuildStatus)> {
    info!(
        "Fetching test data for build {} ({} report sets)",
        build_id,
        report_sets.len()
    );

    let data = source.fetch(build_id, report_sets).await?;
    aggregate(&data)
}

/// Canonical status name of the upstream build.
pub fn get_status(build_info: &BuildInfo) -> AppResult<String> {
    let token = build_info
        .build_status
        .as_deref()
        .ok_or_else(|| AppError::InvalidInput("build info has no build_status".to_string()))?;

    Ok(BuildStatus::classify(token)?.as_str().to_string())
}
