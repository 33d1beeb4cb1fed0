//! List samples.

use std::ops::ControlFlow;

use crate::dom::NodeKind;
use crate::error::{Error, Result};
use crate::options::Limits;
use crate::profile::{ListBlock, ListKind};
use crate::text::{for_each_content_element, normalize_whitespace, truncate_chars, ContentRoot};

/// Collect `<ul>`/`<ol>` lists from the content region.
///
/// Only direct `<li>` children count as items. Menus inside navigation are
/// skipped and lists without non-empty items are ignored.
pub fn extract_lists(root: &ContentRoot<'_>, limits: &Limits) -> Result<Vec<ListBlock>> {
    let root_node = root.node().ok_or(Error::MissingElement("content root"))?;
    let mut lists = Vec::new();
    if limits.max_lists == 0 {
        return Ok(lists);
    }

    for_each_content_element(&root_node, |node, tag| {
        let kind = match tag {
            "ol" => ListKind::Ordered,
            "ul" => ListKind::Unordered,
            _ => return ControlFlow::Continue(()),
        };

        let items: Vec<String> = node
            .children()
            .iter()
            .filter(|child| matches!(NodeKind::of(child), NodeKind::Element(ref tag) if tag == "li"))
            .map(|item| normalize_whitespace(&item.text()))
            .filter(|text| !text.is_empty())
            .take(limits.max_list_items)
            .map(|text| truncate_chars(&text, limits.max_list_item_chars).to_string())
            .collect();

        if !items.is_empty() {
            lists.push(ListBlock { kind, items });
        }
        if lists.len() >= limits.max_lists {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::text::content_root;

    fn lists_of(html: &str) -> Vec<ListBlock> {
        let doc = dom::load_document(html);
        extract_lists(&content_root(&doc), &Limits::default()).unwrap_or_default()
    }

    #[test]
    fn ordered_and_unordered_lists() {
        let lists = lists_of("<ul><li>One</li><li>Two</li></ul><ol><li>First</li></ol>");
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].kind, ListKind::Unordered);
        assert_eq!(lists[0].items, vec!["One", "Two"]);
        assert_eq!(lists[1].kind, ListKind::Ordered);
    }

    #[test]
    fn nav_menus_are_skipped() {
        let lists = lists_of("<body><nav><ul><li>Home</li></ul></nav><ul><li>Real</li></ul></body>");
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].items, vec!["Real"]);
    }

    #[test]
    fn items_and_lists_are_bounded() {
        let items = format!("<li>{}</li>", "x".repeat(300)).repeat(25);
        let html = format!("<ul>{items}</ul>").repeat(8);
        let lists = lists_of(&html);
        assert_eq!(lists.len(), 5);
        assert_eq!(lists[0].items.len(), 10);
        assert_eq!(lists[0].items[0].chars().count(), 100);
    }

    #[test]
    fn empty_lists_are_ignored() {
        assert!(lists_of("<ul><li> </li></ul>").is_empty());
    }
}
