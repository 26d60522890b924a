//! Extractor for Empire's best-movies feature.
//!
//! Each entry is a heading whose text packs rank and title into one string:
//!
//! ```html
//! <h2>12. The Lord of the Rings: The Fellowship of the Ring (2001)</h2>
//! ```
//!
//! The rank is the numeric prefix before the first `.`; the title is the
//! remainder, trimmed, with a trailing `(YYYY)` suffix stripped when present.
//! The year is matched as a pattern rather than dropped by width, so a
//! heading without a year keeps its full title.
//!
//! Empire lists "Se7en" under the spelling "Seven"; the literal is rewritten
//! so the movie matches the other sources.

use crate::error::{Result, ScrapeError};
use crate::extractors::{leading_text, strip_year_suffix};
use crate::record::RawRecord;
use crate::source::SourceId;
use scraper::{Html, Selector};

pub fn extract(html: &str) -> Result<Vec<RawRecord>> {
    let document = Html::parse_document(html);
    let heading_selector = Selector::parse("h2").unwrap();

    let mut records = Vec::new();
    for heading in document.select(&heading_selector) {
        let text = leading_text(heading)
            .ok_or_else(|| ScrapeError::malformed(SourceId::Empire, heading.html()))?;
        let (rank_part, title_part) = text
            .split_once('.')
            .ok_or_else(|| ScrapeError::malformed(SourceId::Empire, heading.html()))?;
        let rank = rank_part
            .trim()
            .parse::<u32>()
            .map_err(|_| ScrapeError::malformed(SourceId::Empire, heading.html()))?;

        let mut title = strip_year_suffix(title_part.trim()).to_string();
        if title == "Seven" {
            title = "Se7en".to_string();
        }

        records.push(RawRecord::new(SourceId::Empire, rank, title));
    }
    Ok(records)
}
