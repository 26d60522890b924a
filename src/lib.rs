//! # cinerank
//!
//! Scrapes "top movies" lists from three differently-structured sites (the
//! IMDB top chart, Ranker's crowdranked list, Empire's best-movies feature)
//! and aggregates them into a cross-site consensus ranking.
//!
//! ## Overview
//!
//! Each site publishes its list in a different markup shape, so each gets a
//! dedicated extractor that turns raw HTML into uniform `(source, rank,
//! title)` records. Titles are reconciled across sites by a normalized
//! comparison key (punctuation stripped, whitespace collapsed, lowercased;
//! source-specific aliases such as Empire's "Seven" for "Se7en" are resolved
//! at extraction time). The aggregator then groups records by key and
//! produces two consensus views: ascending by summed rank and ascending by
//! mean rank, optionally restricted to movies that every configured source
//! reported.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use cinerank::{HttpFetcher, Pipeline, PipelineOptions};
//!
//! let fetcher = HttpFetcher::new()?;
//! let pipeline = Pipeline::new(fetcher, PipelineOptions::default());
//! let rankings = pipeline.run_parallel()?;
//!
//! for entry in &rankings.by_rank_sum {
//!     println!("{:>5}  {}", entry.rank_sum, entry.title);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Site HTML is an unstable external contract, so per-source failures are
//! expected: a source that cannot be fetched ([`FetchError`]) or whose page
//! shape has changed ([`ScrapeError::MalformedSource`]) is logged and
//! contributes zero records while the run continues. Only an empty source
//! configuration fails the run. Note that the default completeness filter
//! counts *configured* sources, so a single dead source can legitimately
//! empty the result set.
//!
//! ## Custom Fetching
//!
//! The fetch step is behind the [`Fetch`] trait; swap in your own transport
//! (caching, recorded fixtures, a different HTTP stack) by implementing it:
//!
//! ```rust
//! use cinerank::{Fetch, FetchError, Pipeline, PipelineOptions, SourceId};
//!
//! struct FixtureFetcher;
//!
//! impl Fetch for FixtureFetcher {
//!     fn fetch(&self, _url: &str) -> Result<String, FetchError> {
//!         Ok("<h2>1. Se7en (1995)</h2>".to_string())
//!     }
//! }
//!
//! let options = PipelineOptions::builder()
//!     .source(SourceId::Empire, "https://www.empireonline.com/test")
//!     .build();
//! let rankings = Pipeline::new(FixtureFetcher, options).run().unwrap();
//! assert_eq!(rankings.by_rank_sum[0].title, "Se7en");
//! ```

mod aggregate;
mod error;
mod fetch;
mod normalize;
mod options;
mod pipeline;
mod record;
mod source;

pub mod extractors;

// Public exports
pub use aggregate::{aggregate, AggregateOptions};
pub use error::{FetchError, Result, ScrapeError};
pub use fetch::HttpFetcher;
pub use normalize::normalize;
pub use options::{PipelineOptions, PipelineOptionsBuilder};
pub use pipeline::{Fetch, Pipeline};
pub use record::{ConsensusEntry, Rankings, RawRecord};
pub use source::SourceId;
