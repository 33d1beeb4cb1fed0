//! Error, challenge and blocked-page detection.
//!
//! Runs before any field extraction. An indicator phrase alone is not enough:
//! the page must also be short (little total text, or a near-empty content
//! region), so articles that merely mention "error 404" are left alone.
//! Fingerprints are checked separately and need no indicator.

use crate::extract::ExtractionContext;

/// Why a page was considered unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// An indicator substring matched on a short page.
    Indicator(String),
    /// A canned-response fingerprint matched.
    Fingerprint(String),
}

/// Decide whether the page is an error or blocked page.
#[must_use]
pub fn detect(ctx: &ExtractionContext<'_>, title: &str) -> Option<BlockReason> {
    if let Some(name) = fingerprint_match(ctx) {
        return Some(BlockReason::Fingerprint(name));
    }

    let text_lower = ctx.scan_text().to_lowercase();
    let title_lower = title.to_lowercase();
    let indicator = ctx
        .options
        .error_indicators
        .iter()
        .find(|indicator| {
            let indicator = indicator.as_str();
            !indicator.is_empty()
                && (text_lower.contains(indicator) || title_lower.contains(indicator))
        })?;

    let limits = &ctx.options.limits;
    let region_chars = ctx.text.chars().count();
    if region_chars < limits.error_region_threshold {
        return Some(BlockReason::Indicator(indicator.clone()));
    }
    // Only walk the full body when the region check was inconclusive.
    if ctx.body_text().chars().count() < limits.error_text_threshold {
        return Some(BlockReason::Indicator(indicator.clone()));
    }

    tracing::debug!(indicator = %indicator, region_chars, "indicator ignored on substantial page");
    None
}

fn fingerprint_match(ctx: &ExtractionContext<'_>) -> Option<String> {
    if ctx.options.fingerprints.is_empty() {
        return None;
    }
    let body = ctx.body_text();
    let body_chars = body.chars().count();
    let body_lower = body.to_lowercase();
    ctx.options
        .fingerprints
        .iter()
        .find(|fingerprint| fingerprint.matches(&body_lower, body_chars))
        .map(|fingerprint| fingerprint.name.clone())
}
