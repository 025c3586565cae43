//! Aggregation of raw report-set records into canonical tests and suites.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::test_suite::SuiteAccumulator;
use crate::models::{AggregationResult, BuildStatus, RawTestRecord, ReportSet, Test, TestResult};

/// Aggregate report sets into tests, suites and a derived build status.
///
/// Report sets are consumed in the given order, records in their listed order.
/// Suites appear in the order their classname is first seen and take their
/// package from that first record. Malformed durations count as zero.
///
/// Fails with [`AppError::NoTestData`] when no report set holds any record and
/// with [`AppError::UnknownTestResult`] on a status token outside
/// PASSED/FAILED/SKIPPED.
pub fn aggregate(report_sets: &[ReportSet]) -> AppResult<(AggregationResult, BuildStatus)> {
    let mut tests = Vec::new();
    let mut suites: Vec<SuiteAccumulator> = Vec::new();
    let mut suite_index: HashMap<String, usize> = HashMap::new();

    for report_set in report_sets {
        for raw in &report_set.records {
            let test = normalize_record(&report_set.name, raw)?;

            let idx = match suite_index.get(&test.classname) {
                Some(&idx) => idx,
                None => {
                    debug!(
                        "New suite '{}' from report set '{}'",
                        test.classname, report_set.name
                    );
                    let package = raw.package_name.clone().unwrap_or_default();
                    suites.push(SuiteAccumulator::new(test.classname.clone(), package));
                    suite_index.insert(test.classname.clone(), suites.len() - 1);
                    suites.len() - 1
                }
            };
            suites[idx].record(&test);

            tests.push(test);
        }
    }

    if tests.is_empty() {
        return Err(AppError::NoTestData);
    }

    let status = if tests.iter().any(|t| t.result == TestResult::Failed) {
        BuildStatus::Failure
    } else {
        BuildStatus::Success
    };

    let suites: Vec<_> = suites.into_iter().map(SuiteAccumulator::finish).collect();

    info!(
        "Aggregated {} tests into {} suites, status {}",
        tests.len(),
        suites.len(),
        status
    );

    Ok((AggregationResult { tests, suites }, status))
}

/// Turn one raw record into a canonical test.
fn normalize_record(report_set: &str, raw: &RawTestRecord) -> AppResult<Test> {
    let classname = raw.class_name.clone().unwrap_or_default();
    let name = raw.test_name.clone().unwrap_or_default();

    let duration = raw.duration().unwrap_or_else(|| {
        warn!(
            "Invalid duration {:?} for test '{}' in '{}', using 0",
            raw.duration, name, classname
        );
        0.0
    });

    let result = TestResult::parse(raw.status.as_deref().unwrap_or_default())?;

    Ok(Test {
        suite: classname.clone(),
        classname,
        test: name,
        result,
        message: raw.error_message.clone().unwrap_or_default(),
        duration,
        reportset: raw
            .report_set
            .clone()
            .unwrap_or_else(|| report_set.to_string()),
    })
}
