//! Paragraph samples.

use std::ops::ControlFlow;

use crate::error::{Error, Result};
use crate::options::Limits;
use crate::text::{for_each_content_element, normalize_whitespace, truncate_chars, ContentRoot};

/// Collect substantial `<p>` paragraphs from the content region.
///
/// Paragraphs inside navigation or UI chrome are skipped; the rest must be
/// longer than `min_paragraph_chars` and are cut at `max_paragraph_chars`.
pub fn extract_paragraphs(root: &ContentRoot<'_>, limits: &Limits) -> Result<Vec<String>> {
    let root_node = root.node().ok_or(Error::MissingElement("content root"))?;
    let mut paragraphs = Vec::new();
    if limits.max_paragraphs == 0 {
        return Ok(paragraphs);
    }

    for_each_content_element(&root_node, |node, tag| {
        if tag != "p" {
            return ControlFlow::Continue(());
        }
        let text = normalize_whitespace(&node.text());
        if text.chars().count() > limits.min_paragraph_chars {
            paragraphs.push(truncate_chars(&text, limits.max_paragraph_chars).to_string());
        }
        if paragraphs.len() >= limits.max_paragraphs {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::text::content_root;

    fn paragraphs_of(html: &str) -> Vec<String> {
        let doc = dom::load_document(html);
        extract_paragraphs(&content_root(&doc), &Limits::default()).unwrap_or_default()
    }

    const LONG: &str = "This paragraph is comfortably longer than fifty characters in total.";

    #[test]
    fn short_paragraphs_are_dropped() {
        let html = format!("<p>Too short.</p><p>{LONG}</p>");
        assert_eq!(paragraphs_of(&html), vec![LONG.to_string()]);
    }

    #[test]
    fn footer_paragraphs_are_skipped() {
        let html = format!("<body><footer><p>{LONG}</p></footer></body>");
        assert!(paragraphs_of(&html).is_empty());
    }

    #[test]
    fn paragraphs_are_capped_at_ten() {
        let html = format!("<p>{LONG}</p>").repeat(30);
        assert_eq!(paragraphs_of(&html).len(), 10);
    }

    #[test]
    fn long_paragraphs_are_truncated() {
        let html = format!("<p>{}</p>", "abcdefghij ".repeat(500));
        let paragraphs = paragraphs_of(&html);
        assert_eq!(paragraphs[0].chars().count(), 1_000);
    }

    #[test]
    fn many_paragraphs_under_deep_nesting_stay_fast() {
        let mut html = "<div>".repeat(2_000);
        html.push_str(&"<p>x</p>".repeat(5_000));
        html.push_str(&format!("<p>{LONG}</p>"));
        html.push_str(&"</div>".repeat(2_000));
        let started = std::time::Instant::now();
        assert_eq!(paragraphs_of(&html), vec![LONG.to_string()]);
        assert!(started.elapsed() < std::time::Duration::from_secs(20));
    }
}
