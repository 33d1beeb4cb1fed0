//! Configuration options for content profiling.
//!
//! The `Options` struct carries the source URL, the size ceilings that keep
//! extraction bounded on pathological documents, and the indicator lists used
//! by the blocked-page detector.

use serde::{Deserialize, Serialize};

use crate::patterns::{API_STUB_MAX_BODY_CHARS, API_STUB_PHRASES, ERROR_INDICATORS};

/// Configuration options for content profiling.
///
/// All fields are public. Use `Default::default()` for standard settings.
///
/// # Example
///
/// ```rust
/// use content_profile::Options;
///
/// let options = Options {
///     url: Some("https://example.com/blog/post".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.limits.max_text_chars, 100_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Source URL of the page, used by page-type classification.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Size ceilings applied by every extractor.
    pub limits: Limits,

    /// Lower-case substrings that mark error, challenge or blocked pages.
    ///
    /// Checked in order against the extracted text and the title.
    pub error_indicators: Vec<String>,

    /// Canned-response fingerprints that flag a page regardless of the
    /// indicator scan.
    pub fingerprints: Vec<Fingerprint>,
}

impl Options {
    /// Default options for a page fetched from `url`.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            limits: Limits::default(),
            error_indicators: ERROR_INDICATORS.iter().map(|s| (*s).to_string()).collect(),
            fingerprints: vec![Fingerprint::api_reference_stub()],
        }
    }
}

/// Hard ceilings on extracted sizes.
///
/// Every collection in a [`crate::ContentProfile`] is capped by one of these,
/// and every regex scan is limited to `max_scan_chars` of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Ceiling on normalized extracted text. Default: `100_000`
    pub max_text_chars: usize,
    /// Ceiling on text handed to pattern scans. Default: `50_000`
    pub max_scan_chars: usize,
    /// Default: `20`
    pub max_headings: usize,
    /// Default: `300`
    pub max_heading_chars: usize,
    /// Trailing-content snippet length per heading. Default: `200`
    pub heading_context_chars: usize,
    /// Element siblings inspected after a heading. Default: `10`
    pub heading_sibling_hops: usize,
    /// Default: `10`
    pub max_paragraphs: usize,
    /// Paragraphs must be strictly longer than this. Default: `50`
    pub min_paragraph_chars: usize,
    /// Default: `1_000`
    pub max_paragraph_chars: usize,
    /// Default: `5`
    pub max_lists: usize,
    /// Default: `10`
    pub max_list_items: usize,
    /// Default: `100`
    pub max_list_item_chars: usize,
    /// Default: `10`
    pub max_statistics: usize,
    /// Per pattern family, before the overall cap. Default: `5`
    pub max_statistics_per_family: usize,
    /// Default: `5`
    pub max_comparisons: usize,
    /// Default: `5`
    pub max_topics: usize,
    /// Default: `10`
    pub max_key_terms: usize,
    /// Default: `10`
    pub max_product_names: usize,
    /// Default: `10`
    pub max_technical_terms: usize,
    /// Pages with less total text than this may be error pages. Default: `500`
    pub error_text_threshold: usize,
    /// Content regions with less text than this may be error pages. Default: `100`
    pub error_region_threshold: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_text_chars: 100_000,
            max_scan_chars: 50_000,
            max_headings: 20,
            max_heading_chars: 300,
            heading_context_chars: 200,
            heading_sibling_hops: 10,
            max_paragraphs: 10,
            min_paragraph_chars: 50,
            max_paragraph_chars: 1_000,
            max_lists: 5,
            max_list_items: 10,
            max_list_item_chars: 100,
            max_statistics: 10,
            max_statistics_per_family: 5,
            max_comparisons: 5,
            max_topics: 5,
            max_key_terms: 10,
            max_product_names: 10,
            max_technical_terms: 10,
            error_text_threshold: 500,
            error_region_threshold: 100,
        }
    }
}

/// A canned page recognised by phrases that co-occur on a short body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Label used in logs.
    pub name: String,
    /// Lower-case phrases that must all be present.
    pub phrases: Vec<String>,
    /// The body text must be shorter than this many characters.
    pub max_body_chars: usize,
}

impl Fingerprint {
    /// The short "API is organized around REST" reference stub served to
    /// clients that cannot render the real documentation.
    #[must_use]
    pub fn api_reference_stub() -> Self {
        Self {
            name: "api-reference-stub".to_string(),
            phrases: API_STUB_PHRASES.iter().map(|s| (*s).to_string()).collect(),
            max_body_chars: API_STUB_MAX_BODY_CHARS,
        }
    }

    /// Whether the lower-cased body text matches this fingerprint.
    #[must_use]
    pub fn matches(&self, body_lower: &str, body_chars: usize) -> bool {
        !self.phrases.is_empty()
            && body_chars < self.max_body_chars
            && self.phrases.iter().all(|phrase| body_lower.contains(phrase.as_str()))
    }
}
