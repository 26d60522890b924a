//! Configuration for a pipeline run.
//!
//! ## Example
//!
//! ```rust
//! use cinerank::{PipelineOptions, SourceId};
//!
//! // Defaults: all three sources, complete filtering, top 10.
//! let options = PipelineOptions::default();
//! assert_eq!(options.sources.len(), 3);
//!
//! // Builder for custom runs.
//! let options = PipelineOptions::builder()
//!     .source(SourceId::Imdb, "https://www.imdb.com/chart/top")
//!     .require_complete(false)
//!     .top_n(25)
//!     .build();
//! assert_eq!(options.sources.len(), 1);
//! ```

use crate::source::SourceId;

/// Configuration for the scraping pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// The sources to fetch, each with the URL to fetch it from.
    pub sources: Vec<(SourceId, String)>,

    /// Only keep movies reported by every configured source.
    ///
    /// The filter counts *configured* sources, not sources that fetched
    /// successfully, so one dead source can empty the result set. That is a
    /// deliberate (if surprising) property of the filter, not an accident.
    pub require_complete: bool,

    /// How many entries each ranked view keeps.
    pub top_n: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            sources: SourceId::ALL
                .into_iter()
                .map(|source| (source, source.default_url().to_string()))
                .collect(),
            require_complete: true,
            top_n: 10,
        }
    }
}

impl PipelineOptions {
    /// Create a builder with an empty source list and the default filter and
    /// truncation settings.
    pub fn builder() -> PipelineOptionsBuilder {
        PipelineOptionsBuilder::default()
    }
}

/// Builder for [`PipelineOptions`].
#[derive(Debug, Default)]
pub struct PipelineOptionsBuilder {
    sources: Vec<(SourceId, String)>,
    require_complete: Option<bool>,
    top_n: Option<usize>,
}

impl PipelineOptionsBuilder {
    /// Add one source with the URL to fetch it from.
    pub fn source(mut self, source: SourceId, url: impl Into<String>) -> Self {
        self.sources.push((source, url.into()));
        self
    }

    /// Set whether to restrict results to movies in every source.
    pub fn require_complete(mut self, require_complete: bool) -> Self {
        self.require_complete = Some(require_complete);
        self
    }

    /// Set how many entries each ranked view keeps.
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Build the options. A builder with no sources added gets the default
    /// source set.
    pub fn build(self) -> PipelineOptions {
        let defaults = PipelineOptions::default();
        PipelineOptions {
            sources: if self.sources.is_empty() {
                defaults.sources
            } else {
                self.sources
            },
            require_complete: self.require_complete.unwrap_or(defaults.require_complete),
            top_n: self.top_n.unwrap_or(defaults.top_n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PipelineOptions::default();
        assert_eq!(options.sources.len(), 3);
        assert!(options.require_complete);
        assert_eq!(options.top_n, 10);
    }

    #[test]
    fn test_builder_overrides() {
        let options = PipelineOptions::builder()
            .source(SourceId::Empire, "https://www.empireonline.com/test")
            .require_complete(false)
            .top_n(5)
            .build();
        assert_eq!(options.sources.len(), 1);
        assert_eq!(options.sources[0].0, SourceId::Empire);
        assert!(!options.require_complete);
        assert_eq!(options.top_n, 5);
    }

    #[test]
    fn test_builder_without_sources_uses_default_set() {
        let options = PipelineOptions::builder().top_n(3).build();
        assert_eq!(options.sources.len(), 3);
    }
}
