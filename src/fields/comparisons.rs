//! Comparison detection.

use super::push_unique;
use crate::error::Result;
use crate::options::Limits;
use crate::patterns::{COMPARISON_HEADING, COMPARISON_PHRASE};
use crate::profile::Heading;
use crate::text::normalize_whitespace;

/// Headings that use comparison vocabulary, then "X vs Y" phrases found in
/// the scan window. De-duplicated ignoring case, capped at `max_comparisons`.
pub fn extract_comparisons(
    headings: &[Heading],
    scan_text: &str,
    limits: &Limits,
) -> Result<Vec<String>> {
    let mut comparisons = Vec::new();

    for heading in headings {
        if COMPARISON_HEADING.is_match(&heading.text) {
            push_unique(&mut comparisons, &heading.text, limits.max_comparisons);
        }
    }

    for m in COMPARISON_PHRASE.find_iter(scan_text) {
        if comparisons.len() >= limits.max_comparisons {
            break;
        }
        push_unique(&mut comparisons, &normalize_whitespace(m.as_str()), limits.max_comparisons);
    }

    Ok(comparisons)
}
