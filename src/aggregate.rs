//! Cross-source aggregation into consensus rankings.
//!
//! Records are grouped on their normalized title key, each group is reduced
//! to a [`ConsensusEntry`], and two sorted views are produced: ascending by
//! summed rank and ascending by mean rank. Sorting is stable; groups that tie
//! keep the order in which their key first appeared in the input.

use crate::normalize::normalize;
use crate::record::{ConsensusEntry, RawRecord, Rankings};
use std::collections::HashMap;

/// Controls for one aggregation run.
#[derive(Debug, Clone, Copy)]
pub struct AggregateOptions {
    /// How many sources the pipeline attempted to fetch. Counts configured
    /// sources, not successful ones, so a failed source keeps the
    /// completeness filter strict.
    pub total_sources: usize,
    /// Drop movies not reported by every attempted source.
    pub require_complete: bool,
    /// Truncate each sorted view to this many entries.
    pub top_n: usize,
}

/// Group records by normalized title and compute both consensus views.
///
/// Empty input produces empty views, not an error.
///
/// # Example
///
/// ```rust
/// use cinerank::{aggregate, AggregateOptions, RawRecord, SourceId};
///
/// let records = vec![
///     RawRecord::new(SourceId::Imdb, 3, "Se7en"),
///     RawRecord::new(SourceId::Ranker, 5, "Se7en"),
///     RawRecord::new(SourceId::Empire, 10, "Se7en"),
/// ];
/// let rankings = aggregate(
///     &records,
///     AggregateOptions {
///         total_sources: 3,
///         require_complete: true,
///         top_n: 10,
///     },
/// );
/// assert_eq!(rankings.by_rank_sum[0].rank_sum, 18);
/// assert_eq!(rankings.by_rank_mean[0].rank_mean, 6.0);
/// ```
pub fn aggregate(records: &[RawRecord], options: AggregateOptions) -> Rankings {
    // Groups live in a vec so first-seen order survives; the map only finds
    // the group for a key.
    let mut entries: Vec<ConsensusEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = normalize(&record.title);
        match index.get(&key) {
            Some(&i) => {
                let entry = &mut entries[i];
                entry.rank_sum += record.rank;
                entry.source_count += 1;
            }
            None => {
                index.insert(key.clone(), entries.len());
                entries.push(ConsensusEntry {
                    key,
                    title: record.title.clone(),
                    rank_sum: record.rank,
                    rank_mean: 0.0,
                    source_count: 1,
                });
            }
        }
    }

    for entry in &mut entries {
        entry.rank_mean = f64::from(entry.rank_sum) / entry.source_count as f64;
    }

    if options.require_complete {
        entries.retain(|entry| entry.source_count == options.total_sources);
    }

    let mut by_rank_sum = entries.clone();
    by_rank_sum.sort_by_key(|entry| entry.rank_sum);
    by_rank_sum.truncate(options.top_n);

    let mut by_rank_mean = entries;
    by_rank_mean.sort_by(|a, b| a.rank_mean.total_cmp(&b.rank_mean));
    by_rank_mean.truncate(options.top_n);

    Rankings {
        by_rank_sum,
        by_rank_mean,
    }
}
