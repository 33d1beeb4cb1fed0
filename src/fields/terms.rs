//! Product-name and technical-term candidates.
//!
//! Both lists keep first-seen order, are de-duplicated ignoring case, and
//! are capped by `Limits`.

use super::push_unique;
use crate::dom::{self, Document};
use crate::error::Result;
use crate::options::Limits;
use crate::patterns::{
    ACRONYM, ACRONYM_STOPLIST, CODE_IDENTIFIER, MIXED_CASE_BRAND, TECHNICAL_VOCABULARY,
    TRADEMARK_PHRASE,
};
use crate::text::{normalize_whitespace, truncate_chars};

/// Elements naming the product a page is about.
const PRODUCT_NAME_SELECTORS: &str = "[itemtype*='schema.org/Product'] [itemprop='name'], .product-title, .product-name, .product_title";

const MAX_TERM_CHARS: usize = 80;

/// Product-name candidates: marked-up product names, then trademarked
/// phrases, then mixed-case brand tokens that are not technical vocabulary.
pub fn extract_product_names(
    document: &Document,
    scan_text: &str,
    limits: &Limits,
) -> Result<Vec<String>> {
    let cap = limits.max_product_names;
    let mut names = Vec::new();

    for node in dom::try_select(document, PRODUCT_NAME_SELECTORS)?.nodes() {
        let text = normalize_whitespace(&node.text());
        push_unique(&mut names, truncate_chars(&text, MAX_TERM_CHARS), cap);
    }

    for m in TRADEMARK_PHRASE.find_iter(scan_text) {
        if names.len() >= cap {
            break;
        }
        let name = m.as_str().trim_end_matches(['™', '®']).trim();
        push_unique(&mut names, name, cap);
    }

    for m in MIXED_CASE_BRAND.find_iter(scan_text) {
        if names.len() >= cap {
            break;
        }
        let token = m.as_str();
        if is_technical_word(token) {
            continue;
        }
        push_unique(&mut names, token, cap);
    }

    Ok(names)
}

/// Technical-term candidates: acronyms, known technical vocabulary, then
/// code-like identifiers.
pub fn extract_technical_terms(scan_text: &str, limits: &Limits) -> Result<Vec<String>> {
    let cap = limits.max_technical_terms;
    let mut terms = Vec::new();

    for m in ACRONYM.find_iter(scan_text) {
        if terms.len() >= cap {
            break;
        }
        let acronym = m.as_str();
        if ACRONYM_STOPLIST.contains(&acronym.to_ascii_uppercase().as_str()) {
            continue;
        }
        push_unique(&mut terms, acronym, cap);
    }

    for word in scan_text.split(|c: char| !c.is_alphanumeric()) {
        if terms.len() >= cap {
            break;
        }
        if is_technical_word(word) {
            push_unique(&mut terms, &word.to_ascii_lowercase(), cap);
        }
    }

    for m in CODE_IDENTIFIER.find_iter(scan_text) {
        if terms.len() >= cap {
            break;
        }
        push_unique(&mut terms, truncate_chars(m.as_str(), MAX_TERM_CHARS), cap);
    }

    Ok(terms)
}

fn is_technical_word(word: &str) -> bool {
    !word.is_empty()
        && TECHNICAL_VOCABULARY
            .iter()
            .any(|known| known.eq_ignore_ascii_case(word))
}
