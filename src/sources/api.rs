use crate::config::Config;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const PROPERTIES_PATH: &str = "/api/properties/";

/// Listings backend (`GET /api/properties/`)
pub struct ApiSource {
    client: Client,
    endpoint: Url,
}

impl ApiSource {
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        Self::with_timeout(&config.api_base_url, timeout)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(PROPERTIES_PATH))
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ListingSource for ApiSource {
    async fn fetch(&self) -> Result<Vec<Value>> {
        debug!("Fetching URL: {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to fetch property list")?;

        if !response.status().is_success() {
            warn!("Listings API returned status: {}", response.status());
            anyhow::bail!("API GET failed ({})", response.status());
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to read property list body")?;

        let records = unwrap_page(body);

        info!("Fetched {} raw records from {}", records.len(), self.source_name());
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "Listings API"
    }
}

/// The backend answers with either a bare array or a paginated
/// `{count, next, previous, results}` page.
fn unwrap_page(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut page) => match page.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
