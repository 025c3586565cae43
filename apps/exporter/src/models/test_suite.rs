//! Suite rollup keyed by classname.

use serde::{Deserialize, Serialize};

use super::test_result::{Test, TestResult, serialize_duration};

/// Aggregated counts and duration for all tests sharing a classname.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    /// Suite name (the classname)
    pub name: String,
    /// Package of the first test seen for this classname
    pub package: String,
    pub passed_count: u32,
    pub failures_count: u32,
    pub skipped_count: u32,
    /// Always passed + failures + skipped
    pub total_count: u32,
    /// Sum of member test durations
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
}

/// Mutable suite state used while records are still being consumed.
#[derive(Debug)]
pub(crate) struct SuiteAccumulator {
    name: String,
    package: String,
    passed: u32,
    failures: u32,
    skipped: u32,
    duration: f64,
}

impl SuiteAccumulator {
    pub(crate) fn new(name: String, package: String) -> Self {
        SuiteAccumulator {
            name,
            package,
            passed: 0,
            failures: 0,
            skipped: 0,
            duration: 0.0,
        }
    }

    pub(crate) fn record(&mut self, test: &Test) {
        match test.result {
            TestResult::Passed => self.passed += 1,
            TestResult::Failed => self.failures += 1,
            TestResult::Skipped => self.skipped += 1,
        }
        self.duration += test.duration;
    }

    pub(crate) fn finish(self) -> Suite {
        Suite {
            total_count: self.passed + self.failures + self.skipped,
            name: self.name,
            package: self.package,
            passed_count: self.passed,
            failures_count: self.failures,
            skipped_count: self.skipped,
            duration: self.duration,
        }
    }
}
