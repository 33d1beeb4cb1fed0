//! Business-type classification.

use super::rules::{first_match, Rule};
use crate::dom::{self, Document};
use crate::patterns::{
    BLOG_MARKERS, BUY_NOW_TEXT, CORPORATE_TEXT, DOCUMENTATION_TEXT, EDUCATIONAL_TEXT,
    NEWS_MARKERS, PAYMENT_TEXT, PRODUCT_MARKERS,
};
use crate::profile::BusinessType;

/// Pages with more code blocks than this read as documentation.
const CODE_BLOCK_THRESHOLD: usize = 10;

/// Inputs consulted by the business-type rules.
pub struct BusinessSignals<'a> {
    pub document: &'a Document,
    /// Extracted text, already capped for pattern scans.
    pub text: &'a str,
    pub topics: &'a [String],
}

impl BusinessSignals<'_> {
    fn topic_mentions(&self, word: &str) -> bool {
        self.topics
            .iter()
            .any(|topic| topic.to_lowercase().contains(word))
    }
}

fn business_rules<'a>() -> [Rule<BusinessSignals<'a>, BusinessType>; 8] {
    [
        Rule {
            name: "payment-text",
            label: BusinessType::Payment,
            applies: |s| PAYMENT_TEXT.is_match(s.text),
        },
        Rule {
            name: "commerce-markup",
            label: BusinessType::Ecommerce,
            applies: |s| {
                dom::has_match(s.document, PRODUCT_MARKERS) || BUY_NOW_TEXT.is_match(s.text)
            },
        },
        Rule {
            name: "blog",
            label: BusinessType::Blog,
            applies: |s| dom::has_match(s.document, BLOG_MARKERS) || s.topic_mentions("blog"),
        },
        Rule {
            name: "news",
            label: BusinessType::News,
            applies: |s| dom::has_match(s.document, NEWS_MARKERS) || s.topic_mentions("news"),
        },
        Rule {
            name: "code-heavy",
            label: BusinessType::Documentation,
            applies: |s| dom::count_matches(s.document, "pre, code") > CODE_BLOCK_THRESHOLD,
        },
        Rule {
            name: "documentation-text",
            label: BusinessType::Documentation,
            applies: |s| DOCUMENTATION_TEXT.is_match(s.text),
        },
        Rule {
            name: "corporate-text",
            label: BusinessType::Corporate,
            applies: |s| CORPORATE_TEXT.is_match(s.text),
        },
        Rule {
            name: "educational-text",
            label: BusinessType::Educational,
            applies: |s| EDUCATIONAL_TEXT.is_match(s.text),
        },
    ]
}

/// Classify the page's business type. The first matching rule wins;
/// [`BusinessType::Other`] when none do.
#[must_use]
pub fn classify_business(signals: &BusinessSignals<'_>) -> BusinessType {
    first_match(&business_rules(), signals).unwrap_or_default()
}
