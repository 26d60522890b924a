//! Error types for the scraping pipeline.

use crate::source::SourceId;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// A transport or HTTP-level failure while fetching a source page.
///
/// Produced by [`Fetch`](crate::Fetch) implementations. The pipeline never
/// retries a failed fetch; the source simply contributes zero records to the
/// run.
#[derive(Error, Debug)]
#[error("GET {url} failed{}: {message}", status_suffix(.status))]
pub struct FetchError {
    /// The URL that was being fetched.
    pub url: String,
    /// HTTP status code, when the failure happened after a response arrived.
    pub status: Option<u16>,
    /// Human-readable description of the failure.
    pub message: String,
}

/// Errors that can occur while fetching, extracting or aggregating rankings
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The source page could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The source page no longer has the markup shape the extractor expects
    //
    // The field is `source_id`, not `source`, so thiserror does not wire it
    // up as the chained `Error::source()`.
    #[error("unexpected {source_id} markup: {detail}")]
    MalformedSource {
        /// Which source's extractor gave up.
        source_id: SourceId,
        /// The offending fragment or a description of what was missing.
        detail: String,
    },

    /// The pipeline was started with an empty source list
    #[error("no sources configured")]
    NoSources,
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" [{code}]")).unwrap_or_default()
}

impl ScrapeError {
    /// Build a [`ScrapeError::MalformedSource`], truncating long markup
    /// fragments so log lines stay readable.
    pub(crate) fn malformed(source_id: SourceId, detail: impl Into<String>) -> Self {
        let mut detail = detail.into();
        const MAX_FRAGMENT: usize = 200;
        if detail.len() > MAX_FRAGMENT {
            let mut end = MAX_FRAGMENT;
            while !detail.is_char_boundary(end) {
                end -= 1;
            }
            detail.truncate(end);
            detail.push('…');
        }
        ScrapeError::MalformedSource { source_id, detail }
    }
}
