use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Common trait for everything that supplies raw property records.
/// The pipeline only sees the materialized list; fetching stays behind this seam.
/// Records come back undecoded so one bad record can't fail the whole fetch.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the raw records
    async fn fetch(&self) -> Result<Vec<Value>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
