pub mod selectors;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_ORIGIN: &str = "https://www.10000recipe.com";
pub const DEFAULT_SEARCH_PATH: &str = "/recipe/list.html";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; recipe-etl/0.1; +https://github.com/kenstt/recipe-etl)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONCURRENT_REQUESTS: usize = 5;
pub const DEFAULT_MAX_LIMIT: usize = 100;

/// Library-facing configuration, used when the pipeline is embedded in a
/// caller (UI layer, cache decorator) rather than driven from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_origin: String,
    pub search_path: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub concurrent_requests: usize,
    pub max_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_origin: DEFAULT_BASE_ORIGIN.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrent_requests: DEFAULT_CONCURRENT_REQUESTS,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn base_origin(&self) -> &str {
        &self.base_origin
    }

    fn search_path(&self) -> &str {
        &self.search_path
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn max_limit(&self) -> usize {
        self.max_limit
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_origin", &self.base_origin)?;
        validate_non_empty_string("search_path", &self.search_path)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        validate_range("concurrent_requests", self.concurrent_requests, 1, 100)?;
        validate_range("max_limit", self.max_limit, 1, DEFAULT_MAX_LIMIT)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::*;
    use crate::domain::model::{AggregationRequest, Source};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "recipe-etl")]
    #[command(about = "Aggregate recipe listings from a recipe site")]
    pub struct CliConfig {
        /// Search text, or a full listing-page URL
        pub source: String,

        #[arg(long, default_value_t = 10)]
        pub limit: usize,

        /// Also fetch each result's detail page for a fuller summary
        #[arg(long)]
        pub enrich: bool,

        /// Titles to drop from the results (comma-separated)
        #[arg(long, value_delimiter = ',')]
        pub exclude: Vec<String>,

        /// Print results as JSON instead of plain lines
        #[arg(long)]
        pub json: bool,

        #[arg(long, default_value = DEFAULT_BASE_ORIGIN)]
        pub base_origin: String,

        #[arg(long, default_value = DEFAULT_SEARCH_PATH)]
        pub search_path: String,

        #[arg(long, default_value = DEFAULT_USER_AGENT)]
        pub user_agent: String,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        pub timeout_secs: u64,

        #[arg(long, default_value_t = DEFAULT_CONCURRENT_REQUESTS)]
        pub concurrent_requests: usize,

        #[arg(long, default_value_t = DEFAULT_MAX_LIMIT)]
        pub max_limit: usize,

        /// Enable verbose output
        #[arg(long)]
        pub verbose: bool,
    }

    impl CliConfig {
        /// 把 CLI 參數轉成一次聚合請求
        pub fn to_request(&self) -> AggregationRequest {
            let source = if self.source.starts_with("http://")
                || self.source.starts_with("https://")
            {
                Source::Url(self.source.clone())
            } else {
                Source::Query(self.source.clone())
            };

            let mut request = AggregationRequest::new(source, self.limit)
                .with_excluded_titles(self.exclude.clone());
            request.enrich = self.enrich;
            request
        }
    }

    impl ConfigProvider for CliConfig {
        fn base_origin(&self) -> &str {
            &self.base_origin
        }

        fn search_path(&self) -> &str {
            &self.search_path
        }

        fn user_agent(&self) -> &str {
            &self.user_agent
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_secs)
        }

        fn concurrent_requests(&self) -> usize {
            self.concurrent_requests
        }

        fn max_limit(&self) -> usize {
            self.max_limit
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_empty_string("source", &self.source)?;
            validate_url("base_origin", &self.base_origin)?;
            validate_non_empty_string("search_path", &self.search_path)?;
            validate_non_empty_string("user_agent", &self.user_agent)?;
            validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
            validate_range("concurrent_requests", self.concurrent_requests, 1, 100)?;
            validate_range("max_limit", self.max_limit, 1, DEFAULT_MAX_LIMIT)?;
            Ok(())
        }
    }
}
