//! Business logic services.

pub mod aggregation;
pub mod decoder;
pub mod export;
pub mod file_source;
pub mod sink;

pub use aggregation::aggregate;
pub use decoder::{BuildDataSource, decode, decode_with_status, get_status};
pub use export::{ExportJob, export_build};
pub use file_source::JsonFileSource;
pub use sink::{JsonFileSink, ResultSink};
