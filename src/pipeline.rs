//! Pipeline driver: fetch, extract, aggregate, in one pass.
//!
//! The driver walks the configured sources, obtains each page through the
//! [`Fetch`] collaborator, runs the matching extractor, and aggregates every
//! surviving record batch into the two consensus views. A source that fails
//! to fetch or whose page shape has changed is logged and contributes zero
//! records; the run only fails outright when no sources are configured.
//!
//! Fetches for different sources are independent, so the driver offers both
//! a sequential [`run`](Pipeline::run) and a threaded
//! [`run_parallel`](Pipeline::run_parallel). Each worker returns its own
//! record batch and the batches are merged at the join point, so both
//! strategies aggregate identical input.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cinerank::{HttpFetcher, Pipeline, PipelineOptions};
//!
//! let fetcher = HttpFetcher::new()?;
//! let pipeline = Pipeline::new(fetcher, PipelineOptions::default());
//! let rankings = pipeline.run_parallel()?;
//!
//! for entry in &rankings.by_rank_sum {
//!     println!("{} (sum {})", entry.title, entry.rank_sum);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::aggregate::{aggregate, AggregateOptions};
use crate::error::{FetchError, Result, ScrapeError};
use crate::options::PipelineOptions;
use crate::record::{Rankings, RawRecord};
use crate::source::SourceId;
use std::collections::HashSet;
use std::thread;
use tracing::{debug, info, warn};

/// The external fetch collaborator.
///
/// Implementations return the raw page markup for a URL or a [`FetchError`]
/// on transport or HTTP failure. The pipeline never retries; scheduling,
/// timeouts and backoff all belong to the implementation.
pub trait Fetch {
    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

/// Drives fetch → extract → aggregate over a configured source set.
pub struct Pipeline<F> {
    fetcher: F,
    options: PipelineOptions,
}

impl<F: Fetch> Pipeline<F> {
    pub fn new(fetcher: F, options: PipelineOptions) -> Self {
        Pipeline { fetcher, options }
    }

    /// Fetch every source one after another and aggregate the results.
    pub fn run(&self) -> Result<Rankings> {
        self.check_sources()?;
        let batches: Vec<Vec<RawRecord>> = self
            .options
            .sources
            .iter()
            .map(|(source, url)| self.collect(*source, url))
            .collect();
        Ok(self.aggregate_batches(batches))
    }

    /// Fetch every source on its own thread and aggregate the results.
    ///
    /// Produces the same rankings as [`run`](Pipeline::run) for the same
    /// pages: each worker owns its batch and the batches are merged only
    /// after every worker has finished.
    pub fn run_parallel(&self) -> Result<Rankings>
    where
        F: Sync,
    {
        self.check_sources()?;
        let batches: Vec<Vec<RawRecord>> = thread::scope(|scope| {
            let workers: Vec<_> = self
                .options
                .sources
                .iter()
                .map(|(source, url)| scope.spawn(move || self.collect(*source, url)))
                .collect();
            workers
                .into_iter()
                .map(|worker| worker.join().expect("fetch worker panicked"))
                .collect()
        });
        Ok(self.aggregate_batches(batches))
    }

    fn check_sources(&self) -> Result<()> {
        if self.options.sources.is_empty() {
            return Err(ScrapeError::NoSources);
        }
        Ok(())
    }

    /// Fetch and extract one source. Failures are contained here: they are
    /// logged with the source identity and yield an empty batch.
    fn collect(&self, source: SourceId, url: &str) -> Vec<RawRecord> {
        debug!(%source, url, "fetching");
        let html = match self.fetcher.fetch(url) {
            Ok(html) => html,
            Err(err) => {
                warn!(%source, %err, "fetch failed, source contributes no records");
                return Vec::new();
            }
        };
        match source.extract(&html) {
            Ok(records) => {
                info!(%source, records = records.len(), "extracted");
                records
            }
            Err(err) => {
                warn!(%source, url, %err, "extraction failed, source contributes no records");
                Vec::new()
            }
        }
    }

    fn aggregate_batches(&self, batches: Vec<Vec<RawRecord>>) -> Rankings {
        let records: Vec<RawRecord> = batches.into_iter().flatten().collect();
        // The completeness denominator counts distinct sources attempted,
        // not URLs; one source configured under two URLs is still one source.
        let distinct_sources: HashSet<SourceId> = self
            .options
            .sources
            .iter()
            .map(|(source, _)| *source)
            .collect();
        aggregate(
            &records,
            AggregateOptions {
                total_sources: distinct_sources.len(),
                require_complete: self.options.require_complete,
                top_n: self.options.top_n,
            },
        )
    }
}
