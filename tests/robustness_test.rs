use content_profile::{extract, extract_bytes, BusinessType, ContentProfile, PageType};
use std::time::{Duration, Instant};

fn assert_within_caps(profile: &ContentProfile) {
    assert!(profile.topics.len() <= 5);
    assert!(!profile.topics.is_empty());
    assert!(!profile.primary_topic.is_empty());
    assert!(profile.samples.headings.len() <= 20);
    assert!(profile.samples.paragraphs.len() <= 10);
    assert!(profile.samples.lists.len() <= 5);
    assert!(profile.samples.statistics.len() <= 10);
    assert!(profile.samples.comparisons.len() <= 5);
    assert!(profile.key_terms.len() <= 10);
    assert!(profile.product_names.len() <= 10);
    assert!(profile.technical_terms.len() <= 10);
    assert_eq!(profile.language.chars().count(), 2);
}

#[test]
fn empty_string_yields_default_shaped_profile() {
    let profile = extract("", None);
    assert_within_caps(&profile);
    assert_eq!(profile.primary_topic, "general content");
    assert_eq!(profile.business_type, BusinessType::Other);
    assert_eq!(profile.page_type, PageType::Homepage);
    assert_eq!(profile.word_count, 0);
    assert_eq!(profile.language, "en");
}

#[test]
fn whitespace_only_input() {
    let profile = extract("   \n\t  ", None);
    assert_within_caps(&profile);
    assert_eq!(profile.word_count, 0);
}

#[test]
fn non_html_text_is_profiled_as_text() {
    let profile = extract("just some plain words without any markup at all", None);
    assert_within_caps(&profile);
    assert_eq!(profile.word_count, 9);
}

#[test]
fn malformed_html_unclosed_tags() {
    let profile = extract("<p>text<div>more", None);
    assert_within_caps(&profile);
    assert_eq!(profile.word_count, 2);
}

#[test]
fn malformed_html_invalid_nesting_and_broken_attributes() {
    for html in [
        "<p><div></p></div>",
        "<div class=\"test id=broken>",
        "&amp text &lt;",
        "<<<>>><</>",
        "<html><body><article>content",
        "<table><tr><td><ul><li><table>",
    ] {
        assert_within_caps(&extract(html, Some("https://example.com/x")));
    }
}

#[test]
fn garbage_bytes_and_null_bytes() {
    let mut bytes: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    bytes.extend_from_slice(b"<p>tail\0text</p>\0\0");
    assert_within_caps(&extract_bytes(&bytes, None));

    let html = "<html><body><p>null\0byte\0inside</p></body></html>";
    assert_within_caps(&extract(html, None));
}

#[test]
fn garbage_urls_do_not_break_classification() {
    for url in ["", "::::", "http://", "javascript:alert(1)", "/\u{0}/", "%%%", "ht tp://a b"] {
        let profile = extract("<p>Some content</p>", Some(url));
        assert_within_caps(&profile);
    }
}

#[test]
fn deeply_nested_tree_is_handled() {
    let depth = 2_000;
    let html = format!(
        "<html><body>{}<p>deep content here</p>{}</body></html>",
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );
    let profile = extract(&html, None);
    assert_within_caps(&profile);
    assert_eq!(profile.word_count, 3);
}

#[test]
fn many_short_paragraphs_under_deep_nesting() {
    let depth = 2_000;
    let html = format!(
        "<html><body>{}{}<ul><li>kept item</li></ul>{}</body></html>",
        "<div>".repeat(depth),
        "<p>x</p>".repeat(10_000),
        "</div>".repeat(depth)
    );
    let start = Instant::now();
    let profile = extract(&html, None);
    assert_within_caps(&profile);
    assert!(profile.samples.paragraphs.is_empty());
    assert_eq!(profile.samples.lists.len(), 1);
    assert!(start.elapsed() < Duration::from_secs(30));
}

#[test]
fn ten_megabyte_input_completes_with_bounded_output() {
    let mut html = String::with_capacity(11 * 1024 * 1024);
    html.push_str("<html><head><title>Huge Page</title></head><body><article>");
    let mut i = 0u64;
    while html.len() < 10 * 1024 * 1024 {
        html.push_str("<h2>Section heading vs another</h2>");
        html.push_str(&format!(
            "<p>Revenue grew {i}% as {i} million users paid ${i} each for the premium plan.</p>"
        ));
        html.push_str("<ul><li>one</li><li>two</li></ul>");
        i += 1;
    }
    html.push_str("</article></body></html>");

    let start = Instant::now();
    let profile = extract(&html, None);
    let elapsed = start.elapsed();

    assert_within_caps(&profile);
    assert_eq!(profile.samples.statistics.len(), 10);
    assert_eq!(profile.samples.headings.len(), 20);
    assert_eq!(profile.samples.paragraphs.len(), 10);
    assert!(profile.word_count <= 100_000);
    assert!(elapsed < Duration::from_secs(120), "took {elapsed:?}");
}

#[test]
fn one_giant_text_node_is_truncated() {
    let html = format!("<p>{}</p>", "word ".repeat(500_000));
    let profile = extract(&html, None);
    assert_within_caps(&profile);
    assert!(profile.word_count <= 20_000);
    assert!(profile.word_count > 0);
}

#[test]
fn adversarial_regex_input_stays_fast() {
    let html = format!(
        "<p>{}</p><p>{}</p><p>{}</p>",
        "9".repeat(200_000),
        "a vs ".repeat(50_000),
        "$1,".repeat(50_000)
    );
    let start = Instant::now();
    let profile = extract(&html, None);
    assert_within_caps(&profile);
    assert!(start.elapsed() < Duration::from_secs(60));
}

#[test]
fn multibyte_text_is_never_split() {
    let html = format!("<h2>{}</h2><p>{}</p>", "é".repeat(1_000), "日本語".repeat(40_000));
    let profile = extract(&html, None);
    assert_within_caps(&profile);
    assert!(profile.samples.headings[0].text.chars().all(|c| c == 'é'));
    for paragraph in &profile.samples.paragraphs {
        assert!(paragraph.chars().count() <= 1_000);
    }
}
