use content_profile::{extract, extract_bytes, extract_with_options, ContentProfile, ListKind, Options};

const RICH_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-GB">
<head>
  <title>Acme Pay vs Legacy Gateways | Acme</title>
  <meta property="og:title" content="Acme Pay comparison">
</head>
<body>
  <nav><ul><li><a href="/">Home</a></li><li><a href="/pricing">Pricing</a></li></ul></nav>
  <main>
    <h1>Acme Pay vs Legacy Gateways</h1>
    <p>The new Acme Pay™ processes card payments for over 40,000 merchants and settles 98.5% of transactions within a day.</p>
    <h2>How to migrate</h2>
    <ol><li>Create an account</li><li>Generate an API key</li><li>Call create_charge() from your backend</li></ol>
    <h2>Pricing compared to competitors</h2>
    <p>Fees start at $0.30 per transaction, compared to legacy providers that charge monthly minimums as well.</p>
    <table><tr><th>Plan</th><th>Fee</th></tr><tr><td>Starter</td><td>2.9%</td></tr></table>
    <h2>FAQ</h2>
    <dl><dt>What is a webhook?</dt><dd>A webhook is defined as an HTTP callback.</dd></dl>
    <pre><code>curl https://api.acme.test/v1/charges</code></pre>
  </main>
  <footer><p>Copyright Acme Ltd. All rights reserved across every territory we operate in.</p></footer>
</body>
</html>"#;

#[test]
fn rich_page_is_fully_profiled() {
    let profile = extract(RICH_PAGE, Some("https://acme.test/compare/legacy"));
    let samples = &profile.samples;

    assert_eq!(samples.title, "Acme Pay vs Legacy Gateways");
    assert_eq!(profile.primary_topic, "Acme Pay vs");
    assert_eq!(profile.language, "en");

    let levels: Vec<u8> = samples.headings.iter().map(|h| h.level).collect();
    assert_eq!(levels, vec![1, 2, 2, 2]);
    assert!(samples.headings[0].trailing_content.starts_with("The new Acme Pay"));

    assert_eq!(samples.paragraphs.len(), 2);
    assert!(samples.paragraphs.iter().all(|p| !p.contains("Copyright")));

    assert_eq!(samples.lists.len(), 1);
    assert_eq!(samples.lists[0].kind, ListKind::Ordered);
    assert_eq!(samples.lists[0].items.len(), 3);

    assert!(samples.statistics.iter().any(|s| s.ends_with("98.5%")));
    assert!(samples.statistics.iter().any(|s| s == "$0.30"));
    assert!(samples.comparisons.iter().any(|c| c == "Acme Pay vs Legacy Gateways"));
    assert!(samples.comparisons.iter().any(|c| c == "Pricing compared to competitors"));

    let f = profile.features;
    assert!(f.has_statistics && f.has_comparisons && f.has_lists && f.has_tables);
    assert!(f.has_code_examples && f.has_faq && f.has_how_to && f.has_definitions);

    assert!(profile.product_names.iter().any(|n| n == "Acme Pay"));
    assert!(profile.technical_terms.iter().any(|t| t == "API"));
    assert!(profile.technical_terms.iter().any(|t| t == "create_charge"));
    assert_eq!(profile.business_type.as_str(), "payment");
    assert!(profile.word_count > 60);
}

#[test]
fn extraction_is_idempotent() {
    let url = Some("https://acme.test/compare/legacy");
    let first = extract(RICH_PAGE, url);
    let second = extract(RICH_PAGE, url);
    assert_eq!(first, second);

    let empty_first = extract("", None);
    assert_eq!(empty_first, extract("", None));
}

#[test]
fn bounds_hold_on_rich_input() {
    let mut html = String::from("<html><body><article>");
    for i in 0..200 {
        html.push_str(&format!(
            "<h2>Heading {i} vs rival{i}</h2>\
             <p>Paragraph {i} reports {i}% growth, {i} million users and ${i}.00 revenue per seat overall.</p>\
             <ul>{}</ul>",
            (0..30).map(|j| format!("<li>item {i}-{j}</li>")).collect::<String>()
        ));
    }
    html.push_str("</article></body></html>");

    let profile = extract(&html, None);
    assert_eq!(profile.samples.headings.len(), 20);
    assert_eq!(profile.samples.paragraphs.len(), 10);
    assert_eq!(profile.samples.lists.len(), 5);
    assert!(profile.samples.lists.iter().all(|l| l.items.len() == 10));
    assert_eq!(profile.samples.statistics.len(), 10);
    assert_eq!(profile.samples.comparisons.len(), 5);
    assert!(profile.topics.len() <= 5);
    assert_eq!(profile.key_terms.len(), 10);
}

#[test]
fn custom_limits_are_respected() {
    let mut options = Options::default();
    options.limits.max_paragraphs = 1;
    options.limits.max_statistics = 2;
    let profile = extract_with_options(RICH_PAGE, &options);
    assert_eq!(profile.samples.paragraphs.len(), 1);
    assert_eq!(profile.samples.statistics.len(), 2);
}

#[test]
fn profile_serializes_with_camel_case_and_lowercase_labels() {
    let profile = extract(RICH_PAGE, Some("https://acme.test/compare/legacy"));
    let json = serde_json::to_value(&profile).unwrap_or_default();

    assert_eq!(json["businessType"], "payment");
    assert!(json["pageType"].is_string());
    assert!(json["samples"]["headings"][0]["trailingContent"].is_string());
    assert!(json["features"]["hasHowTo"].as_bool().unwrap_or(false));
    assert!(json["wordCount"].is_u64());

    let back: ContentProfile = serde_json::from_value(json).unwrap_or_default();
    assert_eq!(back, profile);
}

#[test]
fn bytes_entry_point_decodes_declared_charset() {
    let html = b"<html><head><meta charset=\"windows-1252\"><title>Caf\xE9 Guide Book</title></head>\
                 <body><p>Espresso \x93done right\x94.</p></body></html>";
    let profile = extract_bytes(html, None);
    assert_eq!(profile.samples.title, "Café Guide Book");
    assert_eq!(profile.word_count, 3);
}

#[test]
fn plain_page_keeps_title_and_text_product_names() {
    let html = "<html><head><title>Acme Inc | Home - Toggle Menu</title></head><body>\
                <p>Run the new Acme Cloud™ on your iPhone and keep every photo in sync.</p></body></html>";
    let profile = extract(html, Some("https://acme.test/cloud/overview"));
    assert_eq!(profile.samples.title, "Acme Inc");
    assert_eq!(profile.primary_topic, "Acme Inc");
    assert_eq!(profile.product_names, vec!["Acme Cloud".to_string(), "iPhone".to_string()]);
}
