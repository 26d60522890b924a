//! Title normalization.
//!
//! Two titles are "the same movie" iff their normalized keys are equal. The
//! key is a pure function of the title string: everything that is not an
//! ASCII letter, digit or space is removed, runs of whitespace collapse to a
//! single space, and the result is lowercased.
//!
//! Known aliases (a site listing "Star Wars" for the 1977 film, Empire's
//! "Seven" for "Se7en") are *not* handled here — they are source-specific
//! quirks and are applied by the extractors before records are built.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9 ]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Canonicalize a title into its comparison key.
///
/// Deterministic, total and idempotent. Leading or trailing single spaces
/// survive on purpose; only whitespace *runs* are collapsed, to keep parity
/// with the reference grouping behavior.
///
/// # Example
///
/// ```rust
/// use cinerank::normalize;
///
/// assert_eq!(normalize("The Godfather (1972)!!"), "the godfather 1972");
/// ```
pub fn normalize(title: &str) -> String {
    let stripped = NON_ALNUM_SPACE.replace_all(title, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.to_lowercase()
}
