pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{selectors::SelectorSet, SiteConfig};
pub use self::core::enricher::DetailEnricher;
pub use self::core::fetcher::HttpFetcher;
pub use self::core::parser::ListingParser;
pub use self::core::pipeline::AggregationPipeline;
pub use domain::model::{AggregationRequest, EnrichedListing, ListingRecord, Source};
pub use domain::ports::{ConfigProvider, Fetcher};
pub use utils::error::{FetchError, Result, ScrapeError};
