use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Single-shot document fetch. One outbound GET per call, no retries;
/// implementations map every failure mode onto `FetchError`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_origin(&self) -> &str;
    fn search_path(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn concurrent_requests(&self) -> usize;
    fn max_limit(&self) -> usize;
}
