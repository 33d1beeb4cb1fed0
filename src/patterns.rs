//! Compiled regex patterns, CSS selectors and word tables.
//!
//! All patterns are compiled once on first use with `LazyLock` and shared
//! read-only across extraction calls. The regex engine is linear-time, so
//! none of these can backtrack catastrophically; callers additionally bound
//! the haystack length (see `Limits::max_scan_chars`).

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Extraction
// =============================================================================

/// Main-content containers, highest priority first.
pub const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role='main']",
    "#main-content",
    "#content",
    ".main-content",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".content",
];

/// Tags whose subtrees never contribute text.
pub const NOISE_TAGS: &[&str] = &[
    "nav", "header", "footer", "button", "script", "style", "noscript", "template", "svg",
    "iframe",
];

/// Fragments of class/id values marking UI chrome.
pub const NOISE_NAME_FRAGMENTS: &[&str] = &["logo", "icon", "button"];

/// Elements after which a word boundary is forced.
pub const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "h1", "h2", "h3", "h4", "h5", "h6", "li", "td", "th",
    "blockquote", "pre", "br",
];

/// Text nodes that are pure UI glyphs or control labels.
pub static SKIP_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:menu|close|loading\.*|toggle(?: (?:menu|navigation))?|skip to (?:main )?content|back to top|[×✕✖☰≡▲▼►◄›‹»«→←↑↓•·|/\\+\-]+)$",
    )
    .expect("SKIP_TEXT regex")
});

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Whitespace directly before punctuation.
pub static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.!?;:])").expect("SPACE_BEFORE_PUNCT regex"));

// =============================================================================
// Error / Blocked Page Detection
// =============================================================================

/// Indicator substrings, checked in order against lower-cased text and title.
pub const ERROR_INDICATORS: &[&str] = &[
    "page not found",
    "not found",
    "404",
    "403",
    "500",
    "502",
    "503",
    "error",
    "access denied",
    "forbidden",
    "internal server error",
    "service unavailable",
    "bad gateway",
    "captcha",
    "are you a robot",
    "are you human",
    "verify you are human",
    "checking your browser",
    "just a moment",
    "unusual traffic",
    "rate limit",
    "too many requests",
    "you have been blocked",
    "access to this page has been denied",
    "enable javascript",
    "javascript is required",
    "javascript is disabled",
    "please turn on javascript",
    "attention required! | cloudflare",
    "ddos protection by",
    "request unsuccessful. incapsula",
];

/// Two phrases that together identify a short API-reference stub page.
pub const API_STUB_PHRASES: &[&str] = &[
    "api is organized around rest",
    "returns json-encoded responses",
];

/// Body-length ceiling for the API-reference stub fingerprint.
pub const API_STUB_MAX_BODY_CHARS: usize = 1000;

// =============================================================================
// Title Cleaning
// =============================================================================

/// UI tokens that mark the start of chrome text inside a title.
pub const TITLE_UI_TOKENS: &[&str] = &["logo", "menu", "toggle", "hamburger", "skip to"];

/// Separators between a page title and the site name, in priority order.
pub const TITLE_SEPARATORS: &[&str] = &["|", " - ", " – ", " — ", "::", ":"];

// =============================================================================
// Statistics & Comparisons
// =============================================================================

/// Percentages, optionally preceded by one context word.
pub static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\b[a-z]+\s+)?\d+(?:\.\d+)?\s?%").expect("PERCENTAGE regex")
});

/// Numbers followed by a magnitude or audience unit.
pub static MAGNITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d+(?:[.,]\d+)*\+?\s*(?:million|billion|thousand|users|customers|transactions|requests|visitors|downloads|installs)\b",
    )
    .expect("MAGNITUDE regex")
});

/// Currency-symbol amounts with an optional scale suffix.
pub static CURRENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[$€£¥]\s?\d+(?:[.,]\d+)*(?:\s?(?:million|billion|thousand|[kmb])\b)?")
        .expect("CURRENCY regex")
});

/// Comparison vocabulary in headings.
pub static COMPARISON_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:vs\.?|versus|compared to|comparison|differences?|better than|alternatives?)\b")
        .expect("COMPARISON_HEADING regex")
});

/// Free-text "X vs Y" phrases.
pub static COMPARISON_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[\w-]+\s+(?:vs\.?|versus|compared to)\s+[\w-]+")
        .expect("COMPARISON_PHRASE regex")
});

// =============================================================================
// Terms
// =============================================================================

/// Words excluded from topic frequency counting.
pub const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "also", "because", "been", "before", "being",
    "below", "between", "both", "could", "does", "doing", "down", "during", "each", "even",
    "every", "from", "further", "have", "having", "here", "home", "into", "just", "last",
    "like", "made", "make", "many", "more", "most", "much", "must", "need", "only", "other",
    "over", "page", "same", "should", "some", "such", "than", "that", "their", "them", "then",
    "there", "these", "they", "this", "those", "through", "under", "until", "very", "want",
    "welcome", "were", "what", "when", "where", "which", "while", "will", "with", "would",
    "your", "yours",
];

/// Technical vocabulary recognised regardless of casing.
pub const TECHNICAL_VOCABULARY: &[&str] = &[
    "api", "sdk", "webhook", "webhooks", "endpoint", "endpoints", "oauth", "graphql", "json",
    "xml", "yaml", "rest", "grpc", "websocket", "kubernetes", "docker", "serverless",
    "microservices", "javascript", "typescript", "python", "rust", "golang", "java", "sql",
    "nosql", "cli", "http", "https", "tls", "jwt", "cdn", "dns", "cache", "latency",
    "authentication", "encryption", "tokenization",
];

/// Uppercase acronyms of two to six letters.
pub static ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,6}s?\b").expect("ACRONYM regex"));

/// Acronyms that are ordinary words or noise.
pub const ACRONYM_STOPLIST: &[&str] = &["OK", "AM", "PM", "US", "UK", "FAQ", "FAQS", "TV", "CEO"];

/// Code-like identifiers: `snake_case` words and call expressions.
pub static CODE_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-z][a-z0-9]*(?:_[a-z0-9]+)+\b|\b[A-Za-z_][A-Za-z0-9_.]*\(\)")
        .expect("CODE_IDENTIFIER regex")
});

/// Phrases carrying a trademark or registered mark.
pub static TRADEMARK_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][\w-]*(?:\s[A-Z][\w-]*){0,2}\s?[™®]").expect("TRADEMARK_PHRASE regex")
});

/// Mixed-case brand tokens such as `iPhone` or `PayPal`.
pub static MIXED_CASE_BRAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[a-z]+[A-Z][A-Za-z0-9]*|[A-Z][a-z0-9]+[A-Z][A-Za-z0-9]*)\b")
        .expect("MIXED_CASE_BRAND regex")
});

// =============================================================================
// Topic & Business Classification
// =============================================================================

/// Keyword families mapped to secondary topic labels.
pub static TOPIC_FAMILIES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(?:payments?|transactions?|checkout|billing|invoices?)\b")
                .expect("payment family regex"),
            "payment processing",
        ),
        (
            Regex::new(r"(?i)\b(?:products?|shop|cart|buy|prices?|pricing|sale)\b")
                .expect("commerce family regex"),
            "e-commerce",
        ),
        (
            Regex::new(r"(?i)\b(?:api|endpoints?|integrations?|sdks?|documentation)\b")
                .expect("docs family regex"),
            "technical documentation",
        ),
        (
            Regex::new(r"(?i)\b(?:blog|articles?|posts?|story|stories|news)\b")
                .expect("publishing family regex"),
            "content publishing",
        ),
    ]
});

/// Separators that delimit title tokens for the primary topic.
pub static TITLE_TOKEN_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s|:–—]+").expect("TITLE_TOKEN_SPLIT regex"));

pub static PAYMENT_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:payments?|transactions?|merchants?)\b").expect("PAYMENT_TEXT regex")
});

pub static BUY_NOW_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bbuy now\b").expect("BUY_NOW_TEXT regex"));

pub static DOCUMENTATION_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:api|documentation)\b").expect("DOCUMENTATION_TEXT regex")
});

pub static CORPORATE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:about us|our services|company)\b").expect("CORPORATE_TEXT regex")
});

pub static EDUCATIONAL_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:courses?|tutorials?|learn(?:ing)?)\b").expect("EDUCATIONAL_TEXT regex")
});

pub const PRODUCT_MARKERS: &str =
    "[class*='product'], [class*='price'], [class*='cart'], [class*='shop'], [itemtype*='schema.org/Product']";

pub const BLOG_MARKERS: &str =
    "[class*='blog-post'], [class*='blog-entry'], [class*='post-content'], [class*='entry-content'], article.post, [itemtype*='BlogPosting']";

pub const NEWS_MARKERS: &str =
    "[class*='news-article'], [class*='news-item'], [class*='headline'], [itemtype*='NewsArticle']";

// =============================================================================
// Page-Type Classification
// =============================================================================

/// Paths that always denote a site's home page.
pub const HOME_PATHS: &[&str] = &[
    "/",
    "",
    "/index",
    "/index.html",
    "/index.php",
    "/home",
    "/home.html",
    "/default.html",
    "/default.aspx",
];

/// A `/YYYY/MM/` date segment.
pub static DATE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\d{4}/\d{1,2}(?:/|$)").expect("DATE_PATH regex"));

/// `q=` or `query=` search parameters.
pub static SEARCH_QUERY_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[?&])(?:q|query)=").expect("SEARCH_QUERY_PARAM regex"));

pub const HERO_MARKERS: &str = "[class*='hero'], [class*='jumbotron'], [class*='masthead']";

pub const HOME_NAV_LINKS: &str = "nav a[href='/'], nav a[href='#home']";

pub const ARTICLE_PATH_SEGMENTS: &[&str] = &["blog", "post", "posts", "article", "articles", "news", "story", "stories"];

pub const ARTICLE_MARKERS: &str = "article.post, article.article, [class*='blog-post'], [class*='post-content'], [class*='article-body'], [itemtype*='schema.org/Article'], [itemtype*='BlogPosting'], [itemtype*='NewsArticle'], [class*='byline'], [class*='post-date'], [class*='publish-date'], [class*='article-date']";

pub const PRODUCT_PATH_SEGMENTS: &[&str] = &["product", "products", "item", "items", "p", "dp"];

pub const PRODUCT_DETAIL_MARKERS: &str = "[itemtype*='schema.org/Product'], [class*='product-detail'], [class*='product-details'], [class*='add-to-cart'], [class*='product-price'], [id*='add-to-cart']";

pub const CATEGORY_PATH_SEGMENTS: &[&str] = &["category", "categories", "shop", "collection", "collections", "catalog", "catalogue"];

pub const LISTING_MARKERS: &str = "[class*='product-grid'], [class*='product-list'], [class*='products-grid'], [class*='category-grid'], [class*='collection-grid']";

pub const ABOUT_PATH_SEGMENTS: &[&str] = &["about", "about-us", "team", "our-team", "company", "our-story", "who-we-are"];

pub const CONTACT_PATH_SEGMENTS: &[&str] = &["contact", "contact-us", "contacts"];

pub const CONTACT_FORM_MARKERS: &str = "form[action*='contact'], form[id*='contact'], form[class*='contact']";

pub const DOCS_PATH_SEGMENTS: &[&str] = &["docs", "doc", "documentation", "api", "guide", "guides", "manual", "wiki", "reference"];

pub const DOCS_MARKERS: &str = "[class*='documentation'], [class*='docs-content'], [class*='api-reference'], [class*='markdown-body'], [class*='docs-sidebar']";

pub const SEARCH_PATH_SEGMENTS: &[&str] = &["search", "results", "search-results"];

pub const SEARCH_RESULT_MARKERS: &str = "[class*='search-results'], [class*='search-result'], [id*='search-results']";

// =============================================================================
// Feature Detection
// =============================================================================

pub static FAQ_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:faqs?|frequently asked questions)\b").expect("FAQ_TEXT regex")
});

pub static HOW_TO_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bhow to\b|\bstep \d+\b").expect("HOW_TO_TEXT regex")
});

pub static DEFINITION_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bis defined as\b|\brefers to\b|\bis a term\b").expect("DEFINITION_TEXT regex")
});
