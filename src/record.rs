//! Record types flowing through the pipeline.
//!
//! A [`RawRecord`] is one `(source, rank, title)` triple as a site reported
//! it. [`ConsensusEntry`] is the aggregated view of one movie across every
//! source that reported it, and [`Rankings`] holds the two sorted views the
//! aggregator produces.

use crate::source::SourceId;
use serde::{Deserialize, Serialize};

/// One ranked movie as extracted from a single source's page.
///
/// Immutable once created; `rank` is positive and unique within the records
/// of its own source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// The site this record came from.
    pub source: SourceId,
    /// 1-based position in that site's list.
    pub rank: u32,
    /// The title as the site displayed it, after source-specific alias and
    /// year-suffix handling.
    pub title: String,
}

impl RawRecord {
    pub fn new(source: SourceId, rank: u32, title: impl Into<String>) -> Self {
        RawRecord {
            source,
            rank,
            title: title.into(),
        }
    }
}

/// Aggregated statistics for one movie across sources.
///
/// Built by grouping raw records on their normalized title key. The whole set
/// is recomputed from scratch on every aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusEntry {
    /// Normalized title key the group was formed on.
    pub key: String,
    /// Display title for the group; the first constituent title encountered.
    pub title: String,
    /// Sum of the ranks the sources assigned.
    pub rank_sum: u32,
    /// Mean of the ranks the sources assigned.
    pub rank_mean: f64,
    /// How many sources reported this movie.
    pub source_count: usize,
}

/// The two consensus views produced by one aggregation run.
///
/// Both views contain the same entries, sorted ascending by `rank_sum` and
/// `rank_mean` respectively and truncated to the configured top-N. Ties keep
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    /// Entries sorted ascending by summed rank.
    pub by_rank_sum: Vec<ConsensusEntry>,
    /// Entries sorted ascending by mean rank.
    pub by_rank_mean: Vec<ConsensusEntry>,
}

impl Rankings {
    /// True when no source contributed any records.
    pub fn is_empty(&self) -> bool {
        self.by_rank_sum.is_empty() && self.by_rank_mean.is_empty()
    }
}
