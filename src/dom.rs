//! DOM adapter over `dom_query`.
//!
//! Parsing goes through [`load_document`], which never fails: if the parser
//! panics on hostile input the caller gets an empty, valid document instead.
//! Tree walks use [`NodeKind`] so every node is handled by an exhaustive
//! match rather than by probing node types ad hoc.

use std::panic::{self, AssertUnwindSafe};

pub use dom_query::{Document, Matcher, NodeRef, Selection};
pub use tendril::StrTendril;

use crate::error::{Error, Result};

/// A node as seen by the extractors.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Character data.
    Text(StrTendril),
    /// An element with its lower-cased tag name.
    Element(String),
    /// Comments, doctypes, processing instructions, the document node.
    Other,
}

impl NodeKind {
    /// Classify a raw node.
    #[must_use]
    pub fn of(node: &NodeRef) -> Self {
        if node.is_text() {
            NodeKind::Text(node.text())
        } else if node.is_element() {
            let tag = node
                .node_name()
                .map(|name| name.to_ascii_lowercase())
                .unwrap_or_default();
            NodeKind::Element(tag)
        } else {
            NodeKind::Other
        }
    }
}

/// Parse HTML into a document, substituting an empty document if the
/// parser panics.
#[must_use]
pub fn load_document(html: &str) -> Document {
    match panic::catch_unwind(AssertUnwindSafe(|| Document::from(html))) {
        Ok(document) => document,
        Err(_) => {
            tracing::warn!(html_len = html.len(), "HTML parse failed; using empty document");
            Document::from("")
        }
    }
}

/// Compile a selector, reporting the selector text on failure.
pub fn compile(selector: &str) -> Result<Matcher> {
    Matcher::new(selector).map_err(|_| Error::Selector(selector.to_string()))
}

/// Select with a selector that may not compile. A valid selector that
/// matches nothing yields an empty selection.
pub fn try_select<'a>(document: &'a Document, selector: &str) -> Result<Selection<'a>> {
    Ok(document.select_matcher(&compile(selector)?))
}

/// Whether any element matches `selector`. Invalid selectors count as no match.
#[must_use]
pub fn has_match(document: &Document, selector: &str) -> bool {
    document.try_select(selector).is_some_and(|sel| sel.exists())
}

/// Number of elements matching `selector`. Invalid selectors count as zero.
#[must_use]
pub fn count_matches(document: &Document, selector: &str) -> usize {
    document.try_select(selector).map_or(0, |sel| sel.length())
}

/// Attribute value of the first node in a selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Attribute value read straight from a node.
#[must_use]
pub fn node_attribute(node: &NodeRef, name: &str) -> Option<String> {
    get_attribute(&Selection::from(*node), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_document_accepts_garbage() {
        let doc = load_document("<<<>>><div class=\"x id=y>");
        assert!(doc.select("body").exists());
    }

    #[test]
    fn node_kind_distinguishes_text_and_elements() {
        let doc = load_document("<div><p>Hi</p>tail</div>");
        let div = doc.select("div");
        let node = div.nodes().first().copied();
        let kinds: Vec<String> = node
            .map(|n| n.children())
            .unwrap_or_default()
            .iter()
            .map(|child| match NodeKind::of(child) {
                NodeKind::Text(text) => format!("text:{text}"),
                NodeKind::Element(tag) => format!("element:{tag}"),
                NodeKind::Other => "other".to_string(),
            })
            .collect();
        assert_eq!(kinds, vec!["element:p", "text:tail"]);
    }

    #[test]
    fn invalid_selector_is_an_error_not_a_panic() {
        let doc = load_document("<p>x</p>");
        assert!(matches!(try_select(&doc, "p[[["), Err(Error::Selector(_))));
        assert!(!has_match(&doc, "p[[["));
        assert_eq!(count_matches(&doc, "p"), 1);
    }

    #[test]
    fn valid_selector_without_matches_is_empty() {
        let doc = load_document("<html><head><title>T</title></head><body><p>x</p></body></html>");
        let og = try_select(&doc, "meta[property='og:title']");
        assert!(og.is_ok_and(|sel| !sel.exists()));
        assert_eq!(count_matches(&doc, "ul, ol"), 0);
    }
}
