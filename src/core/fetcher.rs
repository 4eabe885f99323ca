use crate::domain::ports::Fetcher;
use crate::utils::error::{FetchError, Result, ScrapeError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP document fetcher. One client, built once with the fixed timeout
/// and identifying User-Agent; the source site rejects anonymous default
/// headers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> std::result::Result<Vec<u8>, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Request to {} failed: {}", url, e);
                FetchError::Unreachable
            })?;

        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|_| FetchError::Unreachable)?;
        Ok(body.to_vec())
    }
}
