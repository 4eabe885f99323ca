pub mod enricher;
pub mod fetcher;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{AggregationRequest, EnrichedListing, ListingRecord, Source};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
