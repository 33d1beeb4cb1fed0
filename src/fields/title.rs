//! Title extraction.
//!
//! Candidates, first non-empty wins: `<title>`, `og:title`, the first `<h1>`.
//! The winner is cut before any embedded UI token ("Logo", "Menu", ...) and
//! then before the first separator whose leading part is substantial.

use crate::dom::{self, Document, NodeRef, Selection};
use crate::error::Result;
use crate::patterns::{TITLE_SEPARATORS, TITLE_UI_TOKENS};
use crate::text::{normalize_whitespace, truncate_chars};

/// Leading parts this short are site prefixes, not titles.
const MIN_LEADING_PART_CHARS: usize = 5;

const MAX_TITLE_CHARS: usize = 300;

/// Extract the best human-readable title.
pub fn extract_title(document: &Document) -> Result<String> {
    let raw = title_candidates(document)?
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default();
    Ok(clean_title(&raw))
}

fn title_candidates(document: &Document) -> Result<Vec<String>> {
    let head_title = dom::try_select(document, "head > title")?;
    let title = if head_title.exists() {
        head_title
    } else {
        let stray = dom::try_select(document, "title")?;
        stray
            .nodes()
            .iter()
            .find(|node| !inside_svg(node))
            .map(|node| Selection::from(*node))
            .unwrap_or_default()
    };
    let og_title = dom::try_select(document, "meta[property='og:title']")?;
    let h1 = dom::try_select(document, "h1")?;

    let first_text = |sel: &Selection| {
        sel.nodes()
            .first()
            .map(|node| node.text().to_string())
            .unwrap_or_default()
    };
    let og_content = og_title
        .nodes()
        .first()
        .and_then(|node| dom::node_attribute(node, "content"))
        .unwrap_or_default();

    Ok([first_text(&title), og_content, first_text(&h1)]
        .iter()
        .map(|candidate| {
            let candidate = normalize_whitespace(candidate);
            truncate_chars(&candidate, MAX_TITLE_CHARS).trim_end().to_string()
        })
        .collect())
}

/// `<title>` inside inline SVG labels a graphic, not the page.
fn inside_svg(node: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if ancestor.node_name().is_some_and(|name| name.eq_ignore_ascii_case("svg")) {
            return true;
        }
        current = ancestor.parent();
    }
    false
}

/// Strip UI chrome and site-name suffixes from a raw title.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let mut title = normalize_whitespace(raw);

    // ASCII lowercasing keeps byte offsets aligned with `title`.
    let lower = title.to_ascii_lowercase();
    let cut = TITLE_UI_TOKENS
        .iter()
        .filter_map(|token| lower.match_indices(token).map(|(idx, _)| idx).find(|&idx| idx > 0))
        .min();
    if let Some(idx) = cut {
        title = title[..idx].trim().to_string();
    }

    for separator in TITLE_SEPARATORS {
        let mut parts = title.split(separator);
        let (Some(first), Some(_)) = (parts.next(), parts.next()) else {
            continue;
        };
        let first = first.trim();
        if first.chars().count() > MIN_LEADING_PART_CHARS {
            return first.to_string();
        }
    }

    title
}
