//! Site-specific extraction of `(rank, title)` pairs from page markup.
//!
//! Every source publishes its list in a different markup shape, so each one
//! gets its own module with the same contract: parse already-fetched HTML
//! and return the ordered records the page reports, or a
//! [`ScrapeError::MalformedSource`](crate::ScrapeError::MalformedSource) when
//! the page no longer looks the way the extractor expects. Site HTML is an
//! unstable external contract; a shape change here is an expected failure,
//! not a bug in the caller.
//!
//! Source-specific quirks (alias titles, decorative entries, year suffixes)
//! are resolved here, before records are built, so that normalization and
//! aggregation never need to know which site a title came from.

pub mod empire;
pub mod imdb;
pub mod ranker;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

/// Matches a title with a trailing parenthesized year, capturing the title.
pub(crate) static TRAIL_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\s*\(\d{4}\)\s*$").unwrap());

/// Strip a trailing `" (YYYY)"` suffix if present, otherwise return the
/// input unchanged.
pub(crate) fn strip_year_suffix(title: &str) -> &str {
    match TRAIL_YEAR.captures(title) {
        Some(caps) => caps.get(1).map_or(title, |m| m.as_str().trim()),
        None => title,
    }
}

/// The element's first text-node child, if any.
///
/// Both the IMDB title cells and the Empire headings carry their rank in the
/// leading text node, before any nested element.
pub(crate) fn leading_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .find_map(|child| child.value().as_text().map(|text| text.text.to_string()))
}
