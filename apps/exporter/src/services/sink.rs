//! Destinations for exported build records.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::AppResult;
use crate::models::BuildRecord;

/// Persistence collaborator receiving finished build records.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn store(&self, record: &BuildRecord) -> AppResult<()>;
}

/// Writes records as pretty-printed JSON to a file, or to stdout without one.
#[derive(Debug, Clone, Default)]
pub struct JsonFileSink {
    path: Option<PathBuf>,
}

impl JsonFileSink {
    pub fn new(path: Option<PathBuf>) -> Self {
        JsonFileSink { path }
    }
}

#[async_trait]
impl ResultSink for JsonFileSink {
    async fn store(&self, record: &BuildRecord) -> AppResult<()> {
        let mut body = serde_json::to_vec_pretty(record)?;
        body.push(b'\n');

        match &self.path {
            Some(path) => {
                tokio::fs::write(path, &body).await?;
                info!("Wrote build {} to {}", record.build_id, path.display());
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(&body).await?;
                stdout.flush().await?;
            }
        }

        Ok(())
    }
}
