//! End-to-end export of one build: fetch, normalize, store.

use tracing::info;

use crate::error::AppResult;
use crate::models::BuildRecord;
use crate::services::decoder::{self, BuildDataSource};
use crate::services::sink::ResultSink;

/// Identifies the job and build to export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub build_id: String,
    pub job_name: String,
    pub platform: String,
    pub product: Option<String>,
    pub stage: Option<String>,
    pub report_sets: Vec<String>,
}

/// Export a build's results from `source` into `sink`.
///
/// The record's job link is the upstream build URL and its job info is the
/// upstream build version. The build date/time is copied as sent. Errors from
/// decoding or status classification abort the export before anything
/// reaches the sink.
pub async fn export_build(
    job: &ExportJob,
    source: &dyn BuildDataSource,
    sink: &dyn ResultSink,
) -> AppResult<BuildRecord> {
    info!("Exporting build {} of job {}", job.build_id, job.job_name);

    let build_info = source
        .fetch_build_info(&job.build_id, job.product.as_deref(), job.stage.as_deref())
        .await?;

    let mut record = BuildRecord::create(
        &job.job_name,
        build_info.build_url.clone().unwrap_or_default(),
        build_info.build_date_time_utc.clone().unwrap_or_default(),
        &job.build_id,
        &job.platform,
        job.product.clone(),
        build_info.build_version.clone(),
    );

    record.store_tests(decoder::decode(&job.build_id, &job.report_sets, source).await?);
    record.store_status(decoder::get_status(&build_info)?);

    sink.store(&record).await?;

    info!(
        "Exported build {}: {} tests, {} suites, status {}",
        record.build_id,
        record.tests.len(),
        record.suites.len(),
        record.status.as_deref().unwrap_or_default()
    );

    Ok(record)
}
