//! Profile assembly.
//!
//! One call builds one [`ExtractionContext`], runs the blocked-page check,
//! then every field extractor behind its own [`recover`] boundary, and
//! finally merges the results. A panic that escapes all of that is caught
//! once more at the top and answered with [`ContentProfile::default`].

use std::any::Any;
use std::cell::OnceCell;
use std::panic::{self, AssertUnwindSafe};

use crate::blocked;
use crate::classify::business::BusinessSignals;
use crate::classify::page_type::PageSignals;
use crate::classify::{analyze_topics, classify_business, classify_page_type};
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::fields::language::DEFAULT_LANGUAGE;
use crate::fields::{
    detect_features, extract_comparisons, extract_headings, extract_language, extract_lists,
    extract_paragraphs, extract_product_names, extract_statistics, extract_technical_terms,
    extract_title,
};
use crate::options::Options;
use crate::profile::{ContentProfile, ContentSamples};
use crate::text::{content_root, extract_text_with_spacing, truncate_chars, ContentRoot, Region};
use crate::url_utils::PageLocation;

/// State shared by the extractors of a single call.
pub struct ExtractionContext<'a> {
    pub document: &'a Document,
    /// The main content region, or the body.
    pub root: ContentRoot<'a>,
    /// Normalized text of `root`, capped at `Limits::max_text_chars`.
    pub text: String,
    pub options: &'a Options,
    body_text: OnceCell<String>,
}

impl<'a> ExtractionContext<'a> {
    /// Pick the content root and extract its text.
    #[must_use]
    pub fn new(document: &'a Document, options: &'a Options) -> Self {
        let root = content_root(document);
        let text = extract_text_with_spacing(&root.selection, options.limits.max_text_chars);
        tracing::debug!(region = ?root.region, text_len = text.len(), "content root selected");
        Self {
            document,
            root,
            text,
            options,
            body_text: OnceCell::new(),
        }
    }

    /// The prefix of the extracted text that pattern scans may read.
    #[must_use]
    pub fn scan_text(&self) -> &str {
        truncate_chars(&self.text, self.options.limits.max_scan_chars)
    }

    /// Normalized text of the whole body, computed on first use.
    ///
    /// Equal to [`Self::text`] when no main-content region was found.
    pub fn body_text(&self) -> &str {
        self.body_text.get_or_init(|| match self.root.region {
            Region::Body | Region::Document => self.text.clone(),
            Region::Main(_) => {
                let body = self.document.select("body");
                let body = if body.exists() {
                    body
                } else {
                    self.document.select("html")
                };
                extract_text_with_spacing(&body, self.options.limits.max_text_chars)
            }
        })
    }
}

/// Run one extraction step, converting an error or a panic into `T::default()`.
pub(crate) fn recover<T: Default>(field: &'static str, step: impl FnOnce() -> Result<T>) -> T {
    recover_or(field, T::default(), step)
}

/// Like [`recover`] with an explicit fallback value.
pub(crate) fn recover_or<T>(field: &'static str, fallback: T, step: impl FnOnce() -> Result<T>) -> T {
    let error = match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(Ok(value)) => return value,
        Ok(Err(err)) => err,
        Err(payload) => Error::Panicked(panic_message(payload.as_ref())),
    };
    tracing::warn!(field, error = %error, "field extraction failed; using default");
    fallback
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Build a profile, never failing.
pub(crate) fn extract_profile(html: &str, options: &Options) -> ContentProfile {
    match panic::catch_unwind(AssertUnwindSafe(|| build_profile(html, options))) {
        Ok(profile) => profile,
        Err(payload) => {
            tracing::error!(
                error = %panic_message(payload.as_ref()),
                html_len = html.len(),
                "profile construction failed; returning defaults"
            );
            ContentProfile::default()
        }
    }
}

fn build_profile(html: &str, options: &Options) -> ContentProfile {
    let document = dom::load_document(html);
    let ctx = ExtractionContext::new(&document, options);
    let limits = &options.limits;

    let title = recover("title", || extract_title(&document));
    let language = recover_or("language", DEFAULT_LANGUAGE.to_string(), || {
        extract_language(&document)
    });

    if let Some(reason) = blocked::detect(&ctx, &title) {
        tracing::info!(?reason, "error or blocked page detected");
        return ContentProfile::error_page(title, language);
    }

    let scan = ctx.scan_text();
    let headings = recover("headings", || extract_headings(&document, limits));
    let paragraphs = recover("paragraphs", || extract_paragraphs(&ctx.root, limits));
    let lists = recover("lists", || extract_lists(&ctx.root, limits));
    let statistics = recover("statistics", || extract_statistics(scan, limits));
    let comparisons = recover("comparisons", || extract_comparisons(&headings, scan, limits));

    let topics = recover("topics", || Ok(analyze_topics(&title, &headings, limits)));
    let business_type = recover("business_type", || {
        Ok(classify_business(&BusinessSignals {
            document: &document,
            text: scan,
            topics: &topics.topics,
        }))
    });
    let location = PageLocation::parse(options.url.as_deref());
    let page_type = recover("page_type", || {
        Ok(classify_page_type(&PageSignals {
            location: &location,
            document: &document,
            title: &title,
        }))
    });

    let product_names = recover("product_names", || {
        extract_product_names(&document, scan, limits)
    });
    let technical_terms = recover("technical_terms", || extract_technical_terms(scan, limits));

    let samples = ContentSamples {
        title,
        headings,
        paragraphs,
        lists,
        statistics,
        comparisons,
    };
    let features = recover("features", || detect_features(&document, &samples, scan));
    let word_count = ctx.text.split_whitespace().count();

    tracing::debug!(
        business_type = %business_type,
        page_type = %page_type,
        word_count,
        "profile assembled"
    );

    ContentProfile {
        primary_topic: topics.primary_topic,
        topics: topics.topics,
        business_type,
        page_type,
        samples,
        features,
        key_terms: topics.key_terms,
        product_names,
        technical_terms,
        word_count,
        language,
    }
}
