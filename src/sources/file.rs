use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

/// Local JSON catalogue: an array of raw records
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListingSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Value>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let records: Vec<Value> = serde_json::from_str(&json)
            .with_context(|| format!("{} is not a JSON array", self.path.display()))?;

        info!("Loaded {} raw records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "Local file"
    }
}
