//! E2E tests: exporting a build into a sink.

use std::io::Write;

use build_results_lib::error::AppError;
use build_results_lib::models::BuildRecord;
use build_results_lib::services::{ExportJob, JsonFileSink, JsonFileSource, export_build};
use serde_json::json;

use super::test_helpers::*;

fn job() -> ExportJob {
    ExportJob {
        build_id: BUILD_ID.to_string(),
        job_name: JOB_NAME.to_string(),
        platform: PLATFORM.to_string(),
        product: Some(PRODUCT.to_string()),
        stage: None,
        report_sets: report_set_names(),
    }
}

#[tokio::test]
async fn test_export_fills_record_from_build_info() {
    let source = MockSource::new(&passing_data(), "SUCCESS");
    let sink = CapturingSink::default();

    let record = export_build(&job(), &source, &sink).await.unwrap();

    assert_eq!(record.job_name, JOB_NAME);
    assert!(record.job_link.contains(BUILD_ID));
    assert_eq!(record.build_date_time, BUILD_DATE);
    assert_eq!(record.build_id, BUILD_ID);
    assert_eq!(record.platform, PLATFORM);
    assert_eq!(record.product.as_deref(), Some(PRODUCT));
    assert_eq!(record.job_info.as_deref(), Some(BUILD_VERSION));
    assert_eq!(record.status.as_deref(), Some("SUCCESS"));
    verify_passing(&record.tests, &record.suites);

    let stored = sink.records.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], record);
}

#[tokio::test]
async fn test_export_uses_upstream_status_not_derived() {
    let source = MockSource::new(&failing_data(), "Building");
    let sink = CapturingSink::default();

    let record = export_build(&job(), &source, &sink).await.unwrap();

    assert_eq!(record.status.as_deref(), Some("RUNNING"));
    verify_failing(&record.tests, &record.suites);
}

#[tokio::test]
async fn test_export_unknown_status_stores_nothing() {
    let source = MockSource::new(&passing_data(), "unknown_status");
    let sink = CapturingSink::default();

    let err = export_build(&job(), &source, &sink).await.unwrap_err();

    assert!(matches!(err, AppError::UnknownStatus(_)));
    assert!(sink.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_export_from_file_to_file() {
    let export = json!({
        "builds": {
            BUILD_ID: {
                "build_info": {
                    "build_status": "success",
                    "build_date_time_utc": "2019-02-06T13:06:10Z",
                    "build_version": BUILD_VERSION,
                    "build_url": format!("http://myurl/build/{}", BUILD_ID)
                },
                "report_sets": failing_data()
            }
        }
    });
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "{}", export).unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("record.json");

    let source = JsonFileSource::new(input.path());
    let sink = JsonFileSink::new(Some(out_path.clone()));
    let record = export_build(&job(), &source, &sink).await.unwrap();

    let written: BuildRecord =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(written, record);
    assert_eq!(written.status.as_deref(), Some("SUCCESS"));
    assert_eq!(written.build_date_time, "2019-02-06T13:06:10Z");
    verify_failing(&written.tests, &written.suites);
}
