//! Output of result aggregation.

use serde::{Deserialize, Serialize};

use super::test_result::Test;
use super::test_suite::Suite;

/// Tests in input order and suites in first-seen classname order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub tests: Vec<Test>,
    pub suites: Vec<Suite>,
}
