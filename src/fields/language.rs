//! Declared document language.

use crate::dom::{self, Document};
use crate::error::Result;

/// Language used when none is declared.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Two-letter code from `<html lang>`, e.g. `en-US` becomes `en`.
///
/// Anything that does not start with two ASCII letters yields `"en"`.
pub fn extract_language(document: &Document) -> Result<String> {
    let declared = dom::try_select(document, "html")?
        .nodes()
        .first()
        .and_then(|node| dom::node_attribute(node, "lang"))
        .unwrap_or_default();

    let code: String = declared.trim().chars().take(2).collect();
    let is_code = code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic());
    if is_code {
        Ok(code.to_ascii_lowercase())
    } else {
        Ok(DEFAULT_LANGUAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang_of(html: &str) -> String {
        extract_language(&dom::load_document(html)).unwrap_or_default()
    }

    #[test]
    fn region_subtag_is_dropped() {
        assert_eq!(lang_of(r#"<html lang="de-AT"><body></body></html>"#), "de");
        assert_eq!(lang_of(r#"<html lang="FR"><body></body></html>"#), "fr");
    }

    #[test]
    fn missing_or_invalid_language_defaults_to_en() {
        assert_eq!(lang_of("<html><body></body></html>"), "en");
        assert_eq!(lang_of(r#"<html lang="1x"><body></body></html>"#), "en");
        assert_eq!(lang_of(r#"<html lang="x"><body></body></html>"#), "en");
    }
}
