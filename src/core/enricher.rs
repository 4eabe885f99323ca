use crate::core::parser::ListingParser;
use crate::domain::model::{EnrichedListing, ListingRecord};
use crate::domain::ports::Fetcher;
use futures::{stream, StreamExt};
use url::Url;

/// Fans out detail-page fetches for records without an inline summary,
/// capped at a fixed number of in-flight requests so the source site is
/// never hit with an unbounded burst.
///
/// Output order always matches input order: each unit of work carries its
/// original index and writes its result into that slot, whatever order
/// the fetches complete in. A failed fetch or a missing summary node
/// resolves to an empty summary for that record only; it never aborts the
/// batch.
pub struct DetailEnricher<'a, F> {
    fetcher: &'a F,
    parser: &'a ListingParser,
}

impl<'a, F: Fetcher> DetailEnricher<'a, F> {
    pub fn new(fetcher: &'a F, parser: &'a ListingParser) -> Self {
        Self { fetcher, parser }
    }

    pub async fn enrich(
        &self,
        records: Vec<ListingRecord>,
        concurrency: usize,
    ) -> Vec<EnrichedListing> {
        let concurrency = concurrency.max(1);

        // Records that already carry an inline summary are not fetched.
        let jobs: Vec<(usize, Url)> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.inline_summary.is_none())
            .map(|(index, record)| (index, record.detail_link.clone()))
            .collect();

        tracing::debug!(
            "Enriching {} of {} records (concurrency {})",
            jobs.len(),
            records.len(),
            concurrency
        );

        let mut summaries: Vec<Option<String>> = vec![None; records.len()];

        let fetched: Vec<(usize, String)> = stream::iter(jobs)
            .map(|(index, link)| async move { (index, self.fetch_summary(&link).await) })
            .buffer_unordered(concurrency)
            .collect()
            .await;

        for (index, summary) in fetched {
            summaries[index] = Some(summary);
        }

        records
            .into_iter()
            .zip(summaries)
            .map(|(record, fetched)| {
                let summary = fetched
                    .or_else(|| record.inline_summary.clone())
                    .unwrap_or_default();
                EnrichedListing { record, summary }
            })
            .collect()
    }

    async fn fetch_summary(&self, link: &Url) -> String {
        match self.fetcher.fetch(link).await {
            Ok(bytes) => {
                let html = String::from_utf8_lossy(&bytes);
                self.parser.parse_detail_summary(&html).unwrap_or_default()
            }
            Err(e) => {
                tracing::debug!("Detail fetch for {} failed: {}", link, e);
                String::new()
            }
        }
    }
}
