//! Byte-to-text decoding for fetched pages.
//!
//! Resolution order: byte-order mark, then a `<meta>` charset declaration in
//! the first kilobyte, then UTF-8. Decoding is always lossy; malformed
//! sequences become U+FFFD and never fail the call.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// Bytes inspected for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// `<meta charset=...>` or the `charset=` parameter of an `http-equiv`
/// content type, whichever comes first.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bcharset\s*=\s*["']?\s*([A-Za-z0-9._:\-]+)"#)
        .expect("META_CHARSET regex")
});

/// Where the chosen encoding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSource {
    ByteOrderMark,
    MetaDeclaration,
    Default,
}

/// Pick the encoding of an HTML byte stream.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> (&'static Encoding, EncodingSource) {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return (encoding, EncodingSource::ByteOrderMark);
    }

    let window = &html[..html.len().min(SNIFF_WINDOW)];
    let declared = META_CHARSET
        .captures(window)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_bytes()));

    match declared {
        // A page that claims UTF-16 in ASCII-compatible bytes is not UTF-16.
        Some(encoding) if !encoding.is_ascii_compatible() => {
            (UTF_8, EncodingSource::MetaDeclaration)
        }
        Some(encoding) => (encoding, EncodingSource::MetaDeclaration),
        None => (UTF_8, EncodingSource::Default),
    }
}

/// Decode HTML bytes to a UTF-8 string.
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let (encoding, source) = sniff_encoding(html);
    let (text, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), ?source, "replaced malformed byte sequences");
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_wins_over_declaration() {
        let html = b"\xEF\xBB\xBF<meta charset=\"windows-1252\"><p>caf\xC3\xA9</p>";
        let (encoding, source) = sniff_encoding(html);
        assert_eq!(encoding, UTF_8);
        assert_eq!(source, EncodingSource::ByteOrderMark);
        assert!(decode_html(html).contains("café"));
    }

    #[test]
    fn meta_charset_is_honoured() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        let (encoding, source) = sniff_encoding(html);
        assert_eq!(encoding.name(), "windows-1252");
        assert_eq!(source, EncodingSource::MetaDeclaration);
        assert!(decode_html(html).contains("Café"));
    }

    #[test]
    fn http_equiv_content_type_is_honoured() {
        let html = br#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; CHARSET=windows-1252"><p>x</p>"#;
        assert_eq!(sniff_encoding(html).0.name(), "windows-1252");
    }

    #[test]
    fn declaration_outside_window_is_ignored() {
        let mut html = vec![b' '; SNIFF_WINDOW];
        html.extend_from_slice(b"<meta charset=\"windows-1252\">");
        assert_eq!(sniff_encoding(&html), (UTF_8, EncodingSource::Default));
    }

    #[test]
    fn utf16_declaration_in_ascii_bytes_falls_back_to_utf8() {
        let html = b"<meta charset=\"utf-16\"><p>plain</p>";
        assert_eq!(sniff_encoding(html).0, UTF_8);
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        let text = decode_html(b"<p>Test \xFF\xFE Invalid</p>");
        assert!(text.contains("Test"));
        assert!(text.contains('\u{FFFD}'));
        assert!(text.contains("Invalid"));
    }
}
