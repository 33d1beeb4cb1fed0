//! Text extraction with block-level spacing and noise filtering.
//!
//! The walk is iterative (an explicit stack), so deeply nested documents
//! cannot exhaust the call stack, and it stops collecting once a budget of
//! twice the output ceiling is reached, so memory stays bounded on
//! megabyte-scale bodies.

use std::ops::ControlFlow;

use crate::dom::{self, Document, NodeKind, NodeRef, Selection};
use crate::patterns::{
    BLOCK_TAGS, MAIN_CONTENT_SELECTORS, NOISE_NAME_FRAGMENTS, NOISE_TAGS, SKIP_TEXT,
    SPACE_BEFORE_PUNCT, WHITESPACE_NORMALIZE,
};

/// Where extracted text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// A main-content container matched this selector.
    Main(&'static str),
    /// No container matched; the whole body was used.
    Body,
    /// The document has no body element.
    Document,
}

/// The subtree chosen for text extraction.
#[derive(Debug, Clone)]
pub struct ContentRoot<'a> {
    pub selection: Selection<'a>,
    pub region: Region,
}

impl<'a> ContentRoot<'a> {
    /// First node of the root selection.
    #[must_use]
    pub fn node(&self) -> Option<NodeRef<'a>> {
        self.selection.nodes().first().copied()
    }
}

/// Pick the main content region, falling back to the body.
///
/// Selectors are tried in priority order; within one selector the first
/// match carrying any non-whitespace text wins.
#[must_use]
pub fn content_root(document: &Document) -> ContentRoot<'_> {
    for &selector in MAIN_CONTENT_SELECTORS {
        let Ok(matches) = dom::try_select(document, selector) else {
            continue;
        };
        for node in matches.nodes() {
            if !node.text().trim().is_empty() {
                return ContentRoot {
                    selection: Selection::from(*node),
                    region: Region::Main(selector),
                };
            }
        }
    }

    let body = document.select("body");
    if body.exists() {
        ContentRoot {
            selection: body,
            region: Region::Body,
        }
    } else {
        ContentRoot {
            selection: document.select("html"),
            region: Region::Document,
        }
    }
}

/// Whether an element's subtree is navigation or UI chrome.
#[must_use]
pub fn is_noise_element(node: &NodeRef, tag: &str) -> bool {
    if NOISE_TAGS.contains(&tag) {
        return true;
    }

    if dom::node_attribute(node, "role").is_some_and(|role| role.eq_ignore_ascii_case("navigation"))
    {
        return true;
    }

    ["class", "id"].iter().any(|attr| {
        dom::node_attribute(node, attr).is_some_and(|value| {
            let value = value.to_ascii_lowercase();
            NOISE_NAME_FRAGMENTS.iter().any(|fragment| value.contains(fragment))
        })
    })
}

/// Visit every element below `root` outside noise subtrees, in document
/// order. Noise elements are pruned with their whole subtree. The walk ends
/// early when `visit` breaks.
pub fn for_each_content_element<'a, F>(root: &NodeRef<'a>, mut visit: F)
where
    F: FnMut(&NodeRef<'a>, &str) -> ControlFlow<()>,
{
    let mut stack: Vec<NodeRef<'a>> = root.children().into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        let NodeKind::Element(tag) = NodeKind::of(&node) else {
            continue;
        };
        if is_noise_element(&node, &tag) {
            continue;
        }
        if visit(&node, &tag).is_break() {
            return;
        }
        stack.extend(node.children().into_iter().rev());
    }
}

enum Visit<'a> {
    Node(NodeRef<'a>),
    Boundary,
}

/// Extract normalized text from a subtree.
///
/// Noise subtrees are skipped, short and UI-only text nodes are dropped, and
/// a word boundary is forced after every block-level element so that
/// `<p>A</p><p>B</p>` reads `"A B"`, never `"AB"`. The result is capped at
/// `max_chars` characters.
#[must_use]
pub fn extract_text_with_spacing(root: &Selection, max_chars: usize) -> String {
    let Some(root_node) = root.nodes().first() else {
        return String::new();
    };

    let budget = max_chars.saturating_mul(2).max(1024);
    let mut out = String::new();
    let mut collected = 0usize;
    let mut stack: Vec<Visit> = root_node.children().into_iter().rev().map(Visit::Node).collect();

    while let Some(visit) = stack.pop() {
        if collected > budget {
            tracing::debug!(budget, "text walk budget reached");
            break;
        }

        match visit {
            Visit::Boundary => out.push(' '),
            Visit::Node(node) => match NodeKind::of(&node) {
                NodeKind::Text(text) => {
                    let token = text.trim();
                    if !is_meaningful_token(token) {
                        continue;
                    }
                    out.push(' ');
                    out.push_str(token);
                    collected += token.len() + 1;
                }
                NodeKind::Element(tag) => {
                    if is_noise_element(&node, &tag) {
                        continue;
                    }
                    if BLOCK_TAGS.contains(&tag.as_str()) {
                        stack.push(Visit::Boundary);
                    }
                    stack.extend(node.children().into_iter().rev().map(Visit::Node));
                }
                NodeKind::Other => {}
            },
        }
    }

    let text = normalize_text(&out);
    let total = text.chars().count();
    if total > max_chars {
        tracing::debug!(total, max_chars, "extracted text truncated");
        return truncate_chars(&text, max_chars).trim_end().to_string();
    }
    text
}

/// Whether a trimmed text node carries content.
///
/// Single characters survive only when alphanumeric, so stray glyphs and
/// separators vanish while `<td>A</td>` still reads `A`.
fn is_meaningful_token(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(only), None) => only.is_alphanumeric(),
        _ => !SKIP_TEXT.is_match(token),
    }
}

/// Collapse whitespace, drop spaces before punctuation, trim.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let collapsed = WHITESPACE_NORMALIZE.replace_all(text, " ");
    SPACE_BEFORE_PUNCT
        .replace_all(&collapsed, "$1")
        .trim()
        .to_string()
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The first `max_chars` characters of `text`, cut on a char boundary.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
