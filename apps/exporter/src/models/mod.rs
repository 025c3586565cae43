//! Domain models for the build results exporter.

pub mod aggregation;
pub mod build_info;
pub mod build_record;
pub mod build_status;
pub mod raw_record;
pub mod test_result;
pub mod test_suite;

// Re-export commonly used types
pub use aggregation::AggregationResult;
pub use build_info::BuildInfo;
pub use build_record::BuildRecord;
pub use build_status::BuildStatus;
pub use raw_record::{RawTestRecord, ReportSet};
pub use test_result::{Test, TestResult};
pub use test_suite::Suite;
