//! Heading extraction with trailing-content snippets.

use crate::dom::{self, Document, NodeKind, NodeRef};
use crate::error::Result;
use crate::options::Limits;
use crate::profile::Heading;
use crate::text::{is_noise_element, normalize_whitespace, truncate_chars};

/// Extract H1-H4 headings in document order.
///
/// Each heading carries up to `heading_context_chars` of the text that
/// follows it, read from its siblings until the next heading or until
/// `heading_sibling_hops` elements have been visited.
pub fn extract_headings(document: &Document, limits: &Limits) -> Result<Vec<Heading>> {
    let matches = dom::try_select(document, "h1, h2, h3, h4")?;
    let mut headings = Vec::new();

    for node in matches.nodes() {
        if headings.len() >= limits.max_headings {
            break;
        }
        let Some(level) = heading_level(node) else {
            continue;
        };
        let text = normalize_whitespace(&node.text());
        if text.is_empty() {
            continue;
        }

        headings.push(Heading {
            level,
            text: truncate_chars(&text, limits.max_heading_chars).to_string(),
            trailing_content: trailing_content(
                node,
                limits.heading_sibling_hops,
                limits.heading_context_chars,
            ),
        });
    }

    Ok(headings)
}

fn heading_level(node: &NodeRef) -> Option<u8> {
    match NodeKind::of(node) {
        NodeKind::Element(tag) => match tag.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            _ => None,
        },
        NodeKind::Text(_) | NodeKind::Other => None,
    }
}

fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

fn trailing_content(heading: &NodeRef, max_hops: usize, max_chars: usize) -> String {
    let mut snippet = String::new();
    let mut hops = 0usize;
    let mut sibling = heading.next_sibling();

    while let Some(node) = sibling {
        match NodeKind::of(&node) {
            NodeKind::Element(tag) => {
                if is_heading_tag(&tag) {
                    break;
                }
                hops += 1;
                if hops > max_hops {
                    break;
                }
                if !is_noise_element(&node, &tag) {
                    snippet.push(' ');
                    snippet.push_str(&node.text());
                }
            }
            NodeKind::Text(text) => {
                snippet.push(' ');
                snippet.push_str(&text);
            }
            NodeKind::Other => {}
        }
        // Whitespace collapses later, so stop with some slack.
        if snippet.len() > max_chars * 8 {
            break;
        }
        sibling = node.next_sibling();
    }

    let snippet = normalize_whitespace(&snippet);
    truncate_chars(&snippet, max_chars).trim_end().to_string()
}
