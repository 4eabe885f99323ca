use serde::{Deserialize, Serialize};
use url::Url;

/// 列表頁上的單一項目
///
/// A record only exists if both `title` and `detail_link` could be
/// extracted; malformed listing nodes are dropped during parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub title: String,
    pub detail_link: Url,
    pub thumbnail_url: Option<Url>,
    pub inline_summary: Option<String>,
}

/// A `ListingRecord` with its summary resolved. `summary` is always a
/// string: a failed or skipped detail fetch degrades to `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedListing {
    #[serde(flatten)]
    pub record: ListingRecord,
    pub summary: String,
}

/// Where the listing page comes from: a direct URL or search text that is
/// interpolated into the configured search template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Source {
    Url(String),
    Query(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationRequest {
    pub source: Source,
    /// Clamped to the configured maximum before any fan-out.
    pub limit: usize,
    pub enrich: bool,
    /// Titles to drop from the parsed listing (e.g. results already shown
    /// to the user). Filtered before truncation to `limit`.
    pub exclude_titles: Vec<String>,
}

impl AggregationRequest {
    pub fn new(source: Source, limit: usize) -> Self {
        Self {
            source,
            limit,
            enrich: false,
            exclude_titles: Vec::new(),
        }
    }

    pub fn with_enrichment(mut self) -> Self {
        self.enrich = true;
        self
    }

    pub fn with_excluded_titles(mut self, titles: Vec<String>) -> Self {
        self.exclude_titles = titles;
        self
    }
}
