//! Text post-processing helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapse every run of three or more newlines into a single blank line.
///
/// Block rules add their own leading/trailing `"\n\n"`, so adjacent blocks
/// over-produce newlines; this is the one place that caps them.
pub fn collapse_newlines(markdown: &str) -> String {
    BLANK_LINE_RUNS.replace_all(markdown, "\n\n").into_owned()
}
