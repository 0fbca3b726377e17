// src/services/source.rs

//! Sheet sources.
//!
//! A source hands back the raw CSV document for a dataset URL; splitting it
//! into data lines happens here too so every source shares the same rules.

use async_trait::async_trait;
use chrono::Utc;

use crate::error::Result;
use crate::models::FetcherConfig;
use crate::utils::http::{create_async_client, fetch_text};
use crate::utils::url::{display_without_query, with_cache_buster};

/// Anything that can download a sheet export.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Download the raw document behind `url`.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Fetches published sheets over HTTP(S), defeating caches on every request.
pub struct HttpSource {
    client: reqwest::Client,
    cache_buster_param: String,
}

impl HttpSource {
    /// Create a source with a client built from the fetcher settings.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        Ok(Self::with_client(
            create_async_client(config)?,
            &config.cache_buster_param,
        ))
    }

    /// Create a source around an existing client.
    pub fn with_client(client: reqwest::Client, cache_buster_param: &str) -> Self {
        Self {
            client,
            cache_buster_param: cache_buster_param.to_string(),
        }
    }
}

#[async_trait]
impl SheetSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let url = with_cache_buster(
            url,
            &self.cache_buster_param,
            Utc::now().timestamp_millis(),
        )?;
        log::debug!("Fetching sheet {}", display_without_query(&url));
        fetch_text(&self.client, url).await
    }
}

/// Non-blank lines of a CSV document, header removed.
pub fn data_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .skip(1)
        .map(str::to_string)
        .collect()
}

/// Fetch a document and return its data lines in original order.
pub async fn fetch_data_lines(source: &dyn SheetSource, url: &str) -> Result<Vec<String>> {
    let text = source.fetch_text(url).await?;
    Ok(data_lines(&text))
}
