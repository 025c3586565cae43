//! Build data source backed by a JSON export file.
//!
//! Expected layout:
//!
//! ```json
//! {
//!   "builds": {
//!     "123456": {
//!       "build_info": { "build_status": "SUCCESS", "build_url": "..." },
//!       "report_sets": { "Report Set 1": [ { "test_name": "...", ... } ] }
//!     }
//!   }
//! }
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{BuildInfo, RawTestRecord, ReportSet};
use crate::services::decoder::BuildDataSource;

/// Builds stay undecoded so a malformed build cannot break its neighbours.
#[derive(Debug, Deserialize)]
struct ExportFile {
    #[serde(default)]
    builds: Map<String, JsonValue>,
}

/// Reads build data from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    async fn load_build(&self, build_id: &str) -> AppResult<JsonValue> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::FileSystem(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let mut export: ExportFile = serde_json::from_str(&content)?;

        export.builds.remove(build_id).ok_or_else(|| {
            AppError::DataSource(format!(
                "Build {} not found in {}",
                build_id,
                self.path.display()
            ))
        })
    }
}

/// Decode one section of a build, treating a missing or null section as empty.
fn take_section<T>(build: &mut JsonValue, key: &str) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    match build.get_mut(key).map(JsonValue::take) {
        Some(JsonValue::Null) | None => Ok(T::default()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

#[async_trait]
impl BuildDataSource for JsonFileSource {
    async fn fetch(&self, build_id: &str, report_sets: &[String]) -> AppResult<Vec<ReportSet>> {
        let mut build = self.load_build(build_id).await?;
        let available: Map<String, JsonValue> = take_section(&mut build, "report_sets")?;

        let mut data = Vec::with_capacity(report_sets.len());
        for name in report_sets {
            let records: Vec<RawTestRecord> = match available.get(name) {
                Some(value) => Vec::<RawTestRecord>::deserialize(value)?,
                None => {
                    warn!("Report set '{}' not found for build {}", name, build_id);
                    Vec::new()
                }
            };
            data.push(ReportSet::new(name.clone(), records));
        }

        info!(
            "Loaded {} records for build {} from {}",
            data.iter().map(|s| s.records.len()).sum::<usize>(),
            build_id,
            self.path.display()
        );

        Ok(data)
    }

    async fn fetch_build_info(
        &self,
        build_id: &str,
        product: Option<&str>,
        stage: Option<&str>,
    ) -> AppResult<BuildInfo> {
        let mut build = self.load_build(build_id).await?;
        let mut info: BuildInfo = take_section(&mut build, "build_info")?;

        info.build_id.get_or_insert_with(|| build_id.to_string());
        if let Some(product) = product {
            info.product = Some(product.to_string());
        }
        if let Some(stage) = stage {
            info.stage = Some(stage.to_string());
        }

        Ok(info)
    }
}
