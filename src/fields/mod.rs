//! Field extractors.
//!
//! Each extractor is independent: it reads the shared document or the
//! extracted text, enforces its own output caps, and returns a
//! [`crate::Result`]. The assembler converts failures to empty values one
//! field at a time, so a failing extractor never affects its siblings.
//!
//! # Module Structure
//!
//! - `title`: best human-readable title with UI chrome stripped
//! - `headings`: H1-H4 with trailing-content snippets
//! - `paragraphs`: substantial paragraph samples
//! - `lists`: ordered and unordered list samples
//! - `statistics`: percentages, magnitudes and currency amounts
//! - `comparisons`: comparison headings and "X vs Y" phrases
//! - `terms`: product-name and technical-term candidates
//! - `features`: detected-feature flags
//! - `language`: declared document language

pub mod comparisons;
pub mod features;
pub mod headings;
pub mod language;
pub mod lists;
pub mod paragraphs;
pub mod statistics;
pub mod terms;
pub mod title;

pub use comparisons::extract_comparisons;
pub use features::detect_features;
pub use headings::extract_headings;
pub use language::extract_language;
pub use lists::extract_lists;
pub use paragraphs::extract_paragraphs;
pub use statistics::extract_statistics;
pub use terms::{extract_product_names, extract_technical_terms};
pub use title::extract_title;

/// Push `item` unless an entry equal ignoring case is present or `out` is
/// full. Returns whether the item was added.
pub(crate) fn push_unique(out: &mut Vec<String>, item: &str, cap: usize) -> bool {
    let item = item.trim();
    if item.is_empty() || out.len() >= cap {
        return false;
    }
    if out.iter().any(|existing| existing.eq_ignore_ascii_case(item)) {
        return false;
    }
    out.push(item.to_string());
    true
}
