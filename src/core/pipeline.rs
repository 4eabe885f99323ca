use crate::core::enricher::DetailEnricher;
use crate::core::parser::ListingParser;
use crate::domain::model::{AggregationRequest, EnrichedListing, Source};
use crate::domain::ports::{ConfigProvider, Fetcher};
use std::collections::HashSet;
use url::Url;

/// Orchestrates one aggregation: fetch listing page → parse records →
/// filter excluded titles → truncate → optionally enrich from detail
/// pages. Holds no state between invocations; callers that want caching
/// wrap this with their own decorator.
///
/// Every failure mode degrades to a well-defined value: a failed listing
/// fetch or an unusable source yields an empty sequence, a failed detail
/// fetch yields an empty summary for that record only. Nothing here
/// surfaces a transient network error to the caller.
pub struct AggregationPipeline<F: Fetcher, C: ConfigProvider> {
    fetcher: F,
    parser: ListingParser,
    config: C,
}

impl<F: Fetcher, C: ConfigProvider> AggregationPipeline<F, C> {
    pub fn new(fetcher: F, parser: ListingParser, config: C) -> Self {
        Self {
            fetcher,
            parser,
            config,
        }
    }

    pub async fn aggregate(&self, request: &AggregationRequest) -> Vec<EnrichedListing> {
        let limit = request.limit.clamp(1, self.config.max_limit());

        let Some(url) = self.listing_url(&request.source) else {
            tracing::warn!("Could not build a listing URL from {:?}", request.source);
            return Vec::new();
        };

        tracing::info!("Aggregating up to {} listings from {}", limit, url);

        let bytes = match self.fetcher.fetch(&url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Listing fetch failed ({}), returning no results", e);
                return Vec::new();
            }
        };

        let html = String::from_utf8_lossy(&bytes);

        // Excluded titles must not consume result slots, so the parse
        // budget grows by the size of the exclude list.
        let parse_budget = limit.saturating_add(request.exclude_titles.len());
        let mut records = self.parser.parse(&html, parse_budget);

        if !request.exclude_titles.is_empty() {
            let excluded: HashSet<&str> = request
                .exclude_titles
                .iter()
                .map(String::as_str)
                .collect();
            records.retain(|record| !excluded.contains(record.title.as_str()));
        }
        records.truncate(limit);

        tracing::debug!("Parsed {} listing records", records.len());

        let needs_enrichment =
            request.enrich && records.iter().any(|record| record.inline_summary.is_none());

        if needs_enrichment {
            let enricher = DetailEnricher::new(&self.fetcher, &self.parser);
            enricher
                .enrich(records, self.config.concurrent_requests())
                .await
        } else {
            records
                .into_iter()
                .map(|record| {
                    let summary = record.inline_summary.clone().unwrap_or_default();
                    EnrichedListing { record, summary }
                })
                .collect()
        }
    }

    /// 組出列表頁 URL：直接網址，或把查詢字串帶入搜尋模板
    fn listing_url(&self, source: &Source) -> Option<Url> {
        match source {
            Source::Url(raw) => Url::parse(raw).ok(),
            Source::Query(query) => {
                let base = Url::parse(self.config.base_origin()).ok()?;
                let mut url = base.join(self.config.search_path()).ok()?;
                // query_pairs_mut form-encodes, so spaces become '+' as
                // the source's search endpoint expects.
                url.query_pairs_mut().append_pair("q", query.trim());
                Some(url)
            }
        }
    }
}
