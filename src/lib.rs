//! # content-profile
//!
//! Bounded, typed content profiles of arbitrary HTML pages.
//!
//! Given raw (often malformed or hostile) HTML and optionally the page URL,
//! this library produces a [`ContentProfile`]: title, headings with trailing
//! snippets, paragraph and list samples, statistics and comparison phrases,
//! key terms, product and technical terms, a business-type and page-type
//! label, feature flags, word count and declared language.
//!
//! ## Quick Start
//!
//! ```rust
//! use content_profile::{extract, PageType};
//!
//! let html = r#"<html><head><title>Release Notes | Example</title></head>
//! <body><article><h1>Release Notes</h1>
//! <p>This release cuts median request latency by 35% across all regions.</p>
//! </article></body></html>"#;
//!
//! let profile = extract(html, Some("https://example.com/blog/2024/05/release-notes"));
//! assert_eq!(profile.samples.title, "Release Notes");
//! assert_eq!(profile.page_type, PageType::Article);
//! ```
//!
//! ## Guarantees
//!
//! - **Never fails**: every entry point returns a fully populated profile.
//!   Field-level failures fall back to that field's empty value; anything
//!   worse falls back to [`ContentProfile::default`].
//! - **Bounded**: every collection and string is capped (see [`Limits`]) and
//!   pattern scans read a bounded prefix of the text.
//! - **Deterministic**: identical inputs give identical profiles.
//! - **Error pages**: error, challenge and blocked pages yield a distinct
//!   minimal profile (see [`ContentProfile::is_error_page`]).

mod blocked;
mod error;
mod extract;
mod patterns;

/// DOM adapter over `dom_query` with a tagged node view.
pub mod dom;

/// Text extraction with block-level spacing and noise filtering.
pub mod text;

/// Independent field extractors.
pub mod fields;

/// Topic, business-type and page-type classification.
pub mod classify;

/// Output types.
pub mod profile;

/// Configuration and size limits.
pub mod options;

/// Page URL decomposition.
pub mod url_utils;

/// Charset sniffing and decoding of raw bytes.
pub mod encoding;

pub use error::{Error, Result};
pub use options::{Fingerprint, Limits, Options};
pub use profile::{
    BusinessType, ContentProfile, ContentSamples, DetectedFeatures, Heading, ListBlock, ListKind,
    PageType,
};

/// Profile an HTML document with default options.
///
/// `url` is the address the page was fetched from, if known. It only feeds
/// page-type classification; without it the page is treated as having an
/// empty path.
#[must_use]
pub fn extract(html: &str, url: Option<&str>) -> ContentProfile {
    let options = Options {
        url: url.map(str::to_string),
        ..Options::default()
    };
    extract_with_options(html, &options)
}

/// Profile an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use content_profile::{extract_with_options, Options};
///
/// let mut options = Options::with_url("https://shop.example/products/kettle");
/// options.limits.max_headings = 2;
///
/// let html = "<h2>One</h2><h2>Two</h2><h2>Three</h2>";
/// let profile = extract_with_options(html, &options);
/// assert_eq!(profile.samples.headings.len(), 2);
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ContentProfile {
    extract::extract_profile(html, options)
}

/// Profile raw HTML bytes, detecting the character encoding first.
///
/// The encoding comes from a byte-order mark or a `<meta>` charset
/// declaration and defaults to UTF-8. Undecodable bytes are replaced with
/// U+FFFD.
///
/// # Example
///
/// ```rust
/// use content_profile::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9 Opening Hours</title></head></html>";
/// let profile = extract_bytes(html, None);
/// assert_eq!(profile.samples.title, "Café Opening Hours");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], url: Option<&str>) -> ContentProfile {
    let html = encoding::decode_html(html);
    extract(&html, url)
}

/// Profile raw HTML bytes with custom options.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ContentProfile {
    let html = encoding::decode_html(html);
    extract_with_options(&html, options)
}
