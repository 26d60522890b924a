//! Extractor for Ranker's crowdranked list.
//!
//! Ranker does not keep rank and title together in one element. The page
//! carries two parallel `<meta>` annotation streams in document order, one
//! for positions and one for names:
//!
//! ```html
//! <meta itemprop="position" content="1" />
//! <meta itemprop="name" content="The Shawshank Redemption (1994)" />
//! ```
//!
//! The first two `name` entries describe the list itself rather than movies
//! and must be discarded before pairing the streams by index. Pairing
//! truncates to the shorter stream.
//!
//! Two movies appear under names that no other source uses, so a fixed alias
//! table rewrites them to their canonical titles before the record is built.

use crate::error::{Result, ScrapeError};
use crate::extractors::{strip_year_suffix, TRAIL_YEAR};
use crate::record::RawRecord;
use crate::source::SourceId;
use scraper::{Html, Selector};

/// Canonical titles for names Ranker lists under a different form.
const ALIASES: [(&str, &str); 2] = [
    ("Star Wars", "Star Wars: Episode IV — A New Hope"),
    (
        "Indiana Jones and the Raiders of the Lost Ark",
        "Raiders of the Lost Ark",
    ),
];

/// How many leading `name` entries describe the page rather than movies.
const DECORATIVE_NAMES: usize = 2;

pub fn extract(html: &str) -> Result<Vec<RawRecord>> {
    let document = Html::parse_document(html);
    let position_selector = Selector::parse(r#"meta[itemprop="position"]"#).unwrap();
    let name_selector = Selector::parse(r#"meta[itemprop="name"]"#).unwrap();

    let mut ranks = Vec::new();
    for meta in document.select(&position_selector) {
        let content = meta
            .value()
            .attr("content")
            .ok_or_else(|| ScrapeError::malformed(SourceId::Ranker, meta.html()))?;
        let rank = content
            .trim()
            .parse::<u32>()
            .map_err(|_| ScrapeError::malformed(SourceId::Ranker, meta.html()))?;
        ranks.push(rank);
    }

    let mut titles = Vec::new();
    for meta in document.select(&name_selector) {
        let content = meta
            .value()
            .attr("content")
            .ok_or_else(|| ScrapeError::malformed(SourceId::Ranker, meta.html()))?;
        titles.push(clean_name(content));
    }

    Ok(ranks
        .into_iter()
        .zip(titles.into_iter().skip(DECORATIVE_NAMES))
        .map(|(rank, title)| RawRecord::new(SourceId::Ranker, rank, title))
        .collect())
}

/// Strip a trailing year, or failing that rewrite known aliases.
///
/// The alias table only applies to names without a year suffix; Ranker's
/// aliased entries are exactly the ones it lists bare.
fn clean_name(name: &str) -> String {
    if TRAIL_YEAR.is_match(name) {
        return strip_year_suffix(name).to_string();
    }
    for (alias, canonical) in ALIASES {
        if name == alias {
            return canonical.to_string();
        }
    }
    name.to_string()
}
