//! E2E tests: decoding build data and build status.

use build_results_lib::error::AppError;
use build_results_lib::models::{BuildInfo, BuildStatus};
use build_results_lib::services::{aggregate, decode, decode_with_status, get_status};

use super::test_helpers::*;

#[tokio::test]
async fn test_decode_passing_build() {
    let source = MockSource::new(&passing_data(), "SUCCESS");

    let results = decode(BUILD_ID, &report_set_names(), &source).await.unwrap();

    verify_passing(&results.tests, &results.suites);
    assert_eq!(source.last_request(), (BUILD_ID.to_string(), report_set_names()));
}

#[tokio::test]
async fn test_decode_failing_build() {
    let source = MockSource::new(&failing_data(), "RUNNING");

    let (results, status) = decode_with_status("654321", &report_set_names(), &source)
        .await
        .unwrap();

    verify_failing(&results.tests, &results.suites);
    assert_eq!(status, BuildStatus::Failure);
    assert_eq!(source.last_request().0, "654321");
}

#[test]
fn test_aggregate_derives_status() {
    let (results, status) = aggregate(&to_report_sets(&passing_data())).unwrap();
    assert_eq!(status, BuildStatus::Success);
    verify_passing(&results.tests, &results.suites);

    let (results, status) = aggregate(&to_report_sets(&failing_data())).unwrap();
    assert_eq!(status, BuildStatus::Failure);
    verify_failing(&results.tests, &results.suites);
}

#[test]
fn test_aggregate_without_tests_fails() {
    assert!(matches!(aggregate(&[]), Err(AppError::NoTestData)));
}

#[tokio::test]
async fn test_decode_without_tests_fails() {
    let source = MockSource::new(&serde_json::json!({ "Report Set 1": [] }), "SUCCESS");

    let err = decode(BUILD_ID, &report_set_names(), &source)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NoTestData));
}

#[test]
fn test_get_status() {
    let status = get_status(&BuildInfo::with_status("123456", "SUCCESS")).unwrap();
    assert_eq!(status, BuildStatus::Success.as_str());

    let status = get_status(&BuildInfo::with_status("654321", "RUNNING")).unwrap();
    assert_eq!(status, BuildStatus::Running.as_str());

    let err = get_status(&BuildInfo::with_status("1", "unknown_status")).unwrap_err();
    assert!(matches!(err, AppError::UnknownStatus(_)));
}
