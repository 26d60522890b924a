//! Extractor for the IMDB top chart.
//!
//! The chart is a table; each movie row has a `td.titleColumn` cell whose
//! leading text node holds the rank as `"N."` and whose nested link holds the
//! display title:
//!
//! ```html
//! <td class="titleColumn">
//!     1.
//!     <a href="/title/tt0111161/">The Shawshank Redemption</a>
//!     <span class="secondaryInfo">(1994)</span>
//! </td>
//! ```
//!
//! Ranks are read from the cell text, not inferred from document order,
//! though the page lists cells in rank order anyway.

use crate::error::{Result, ScrapeError};
use crate::extractors::leading_text;
use crate::record::RawRecord;
use crate::source::SourceId;
use scraper::{Html, Selector};

pub fn extract(html: &str) -> Result<Vec<RawRecord>> {
    let document = Html::parse_document(html);
    let cell_selector = Selector::parse("td.titleColumn").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let mut records = Vec::new();
    for cell in document.select(&cell_selector) {
        let rank_text = leading_text(cell)
            .ok_or_else(|| ScrapeError::malformed(SourceId::Imdb, cell.html()))?;
        let rank = rank_text
            .trim()
            .strip_suffix('.')
            .and_then(|digits| digits.parse::<u32>().ok())
            .ok_or_else(|| ScrapeError::malformed(SourceId::Imdb, cell.html()))?;

        let link = cell
            .select(&link_selector)
            .next()
            .ok_or_else(|| ScrapeError::malformed(SourceId::Imdb, cell.html()))?;
        let title = link.text().collect::<String>().trim_end().to_string();

        records.push(RawRecord::new(SourceId::Imdb, rank, title));
    }
    Ok(records)
}
