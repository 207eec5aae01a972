use crate::normalize::BatchPolicy;
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// When set, listings come from this JSON file instead of the API
    pub listings_file: Option<PathBuf>,
    pub featured_limit: usize,
    pub request_timeout_secs: u64,
    pub batch_policy: BatchPolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let strict = match var("LORA_STRICT_NORMALIZE") {
            Some(value) => parse_flag(&value).with_context(|| {
                format!("LORA_STRICT_NORMALIZE must be a boolean, got {:?}", value)
            })?,
            None => false,
        };

        Ok(Self {
            api_base_url: var("LORA_API_BASE_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000".to_string()),
            listings_file: var("LORA_LISTINGS_FILE").map(PathBuf::from),
            featured_limit: var("LORA_FEATURED_LIMIT")
                .unwrap_or_else(|| "4".to_string())
                .parse()
                .context("LORA_FEATURED_LIMIT must be a valid number")?,
            request_timeout_secs: var("LORA_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .context("LORA_REQUEST_TIMEOUT_SECS must be a valid number")?,
            batch_policy: if strict {
                BatchPolicy::Abort
            } else {
                BatchPolicy::SkipMalformed
            },
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
