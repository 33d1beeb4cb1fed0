//! Detected-feature flags.

use crate::dom::{self, Document};
use crate::error::Result;
use crate::patterns::{DEFINITION_TEXT, FAQ_TEXT, HOW_TO_TEXT};
use crate::profile::{ContentSamples, DetectedFeatures, ListKind};

/// Derive the eight feature flags from the samples, the document and the
/// scan window.
pub fn detect_features(
    document: &Document,
    samples: &ContentSamples,
    scan_text: &str,
) -> Result<DetectedFeatures> {
    let heading_text = samples
        .headings
        .iter()
        .map(|heading| heading.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(DetectedFeatures {
        has_statistics: !samples.statistics.is_empty(),
        has_comparisons: !samples.comparisons.is_empty(),
        has_lists: !samples.lists.is_empty(),
        has_tables: dom::has_match(document, "table td"),
        has_code_examples: dom::has_match(document, "pre, code"),
        has_faq: dom::has_match(document, "[itemtype*='FAQPage']")
            || FAQ_TEXT.is_match(&heading_text),
        has_how_to: dom::has_match(document, "[itemtype*='HowTo']")
            || HOW_TO_TEXT.is_match(&heading_text)
            || (HOW_TO_TEXT.is_match(scan_text)
                && samples.lists.iter().any(|list| list.kind == ListKind::Ordered)),
        has_definitions: dom::has_match(document, "dl dt") || DEFINITION_TEXT.is_match(scan_text),
    })
}
