//! The closed set of supported ranking sources.
//!
//! Each [`SourceId`] variant maps to exactly one extractor in
//! [`crate::extractors`] and one host fragment used to classify URLs. Adding
//! a source means adding a variant and an extractor module, never matching on
//! URL substrings at the call site.

use crate::error::Result;
use crate::record::RawRecord;
use crate::extractors;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Identifies one of the external movie-ranking sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceId {
    /// The IMDB top-250 chart.
    Imdb,
    /// Ranker's crowdranked best-movies list.
    Ranker,
    /// Empire's best-movies feature page.
    Empire,
}

impl SourceId {
    /// All supported sources, in a fixed order.
    pub const ALL: [SourceId; 3] = [SourceId::Imdb, SourceId::Ranker, SourceId::Empire];

    /// The host fragment that identifies this source's pages.
    pub fn host_fragment(self) -> &'static str {
        match self {
            SourceId::Imdb => "imdb.com",
            SourceId::Ranker => "ranker.com",
            SourceId::Empire => "empireonline.com",
        }
    }

    /// The production URL of this source's ranking page.
    pub fn default_url(self) -> &'static str {
        match self {
            SourceId::Imdb => "https://www.imdb.com/chart/top",
            SourceId::Ranker => {
                "https://www.ranker.com/crowdranked-list/the-best-movies-of-all-time"
            }
            SourceId::Empire => "https://www.empireonline.com/movies/features/best-movies/",
        }
    }

    /// Classify a URL by its host.
    ///
    /// Returns `None` for URLs that do not belong to any known source (and
    /// for strings that do not parse as URLs). The caller is expected to skip
    /// such URLs rather than fail the run.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cinerank::SourceId;
    ///
    /// assert_eq!(
    ///     SourceId::for_url("https://www.imdb.com/chart/top"),
    ///     Some(SourceId::Imdb)
    /// );
    /// assert_eq!(SourceId::for_url("https://example.com/movies"), None);
    /// ```
    pub fn for_url(url: &str) -> Option<SourceId> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str()?;
        SourceId::ALL
            .into_iter()
            .find(|source| host.ends_with(source.host_fragment()))
    }

    /// Run this source's extractor over already-fetched page markup.
    ///
    /// Returns the ordered `(rank, title)` records the page reports, or a
    /// [`ScrapeError::MalformedSource`](crate::ScrapeError::MalformedSource)
    /// if the page no longer has the expected shape.
    pub fn extract(self, html: &str) -> Result<Vec<RawRecord>> {
        match self {
            SourceId::Imdb => extractors::imdb::extract(html),
            SourceId::Ranker => extractors::ranker::extract(html),
            SourceId::Empire => extractors::empire::extract(html),
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceId::Imdb => "imdb",
            SourceId::Ranker => "ranker",
            SourceId::Empire => "empire",
        };
        f.write_str(name)
    }
}
