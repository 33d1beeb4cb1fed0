//! Output types.
//!
//! A [`ContentProfile`] is always fully populated: every collection has an
//! empty value, and every classification resolves to a member of its closed
//! set. The serde representation uses camelCase field names and lowercase
//! labels so the scoring layer can consume it as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary topic used when nothing better can be derived.
pub const DEFAULT_TOPIC: &str = "general content";

/// Primary topic of a detected error or blocked page.
pub const ERROR_TOPIC: &str = "Error Page";

/// Placeholder paragraph of a detected error or blocked page.
pub const ERROR_PLACEHOLDER: &str =
    "Page content could not be analyzed: the page appears to be an error, challenge or access-restricted page.";

/// Commercial or editorial category of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Payment,
    Ecommerce,
    Blog,
    News,
    Documentation,
    Corporate,
    Educational,
    #[default]
    Other,
}

impl BusinessType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Ecommerce => "ecommerce",
            Self::Blog => "blog",
            Self::News => "news",
            Self::Documentation => "documentation",
            Self::Corporate => "corporate",
            Self::Educational => "educational",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural role of a page within its site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Homepage,
    Article,
    Product,
    Category,
    About,
    Contact,
    Documentation,
    Search,
    #[default]
    General,
}

impl PageType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::Article => "article",
            Self::Product => "product",
            Self::Category => "category",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Documentation => "documentation",
            Self::Search => "search",
            Self::General => "general",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heading with a short snippet of the content that follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// 1 through 4.
    pub level: u8,
    pub text: String,
    /// Up to 200 characters of sibling text following the heading.
    pub trailing_content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    #[default]
    Unordered,
    Ordered,
}

/// A list sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlock {
    pub kind: ListKind,
    pub items: Vec<String>,
}

/// Representative samples of the page's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSamples {
    pub title: String,
    pub headings: Vec<Heading>,
    pub paragraphs: Vec<String>,
    pub lists: Vec<ListBlock>,
    pub statistics: Vec<String>,
    pub comparisons: Vec<String>,
}

/// Content features detected on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct DetectedFeatures {
    pub has_statistics: bool,
    pub has_comparisons: bool,
    pub has_lists: bool,
    pub has_tables: bool,
    pub has_code_examples: bool,
    pub has_faq: bool,
    pub has_how_to: bool,
    pub has_definitions: bool,
}

/// The complete structured summary of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProfile {
    pub primary_topic: String,
    /// Ranked, unique, at most five entries.
    pub topics: Vec<String>,
    pub business_type: BusinessType,
    pub page_type: PageType,
    pub samples: ContentSamples,
    pub features: DetectedFeatures,
    pub key_terms: Vec<String>,
    pub product_names: Vec<String>,
    pub technical_terms: Vec<String>,
    pub word_count: usize,
    /// Two-letter language code.
    pub language: String,
}

impl Default for ContentProfile {
    fn default() -> Self {
        Self {
            primary_topic: DEFAULT_TOPIC.to_string(),
            topics: vec![DEFAULT_TOPIC.to_string()],
            business_type: BusinessType::Other,
            page_type: PageType::General,
            samples: ContentSamples::default(),
            features: DetectedFeatures::default(),
            key_terms: Vec::new(),
            product_names: Vec::new(),
            technical_terms: Vec::new(),
            word_count: 0,
            language: "en".to_string(),
        }
    }
}

impl ContentProfile {
    /// The minimal profile returned for error, challenge and blocked pages.
    #[must_use]
    pub fn error_page(title: String, language: String) -> Self {
        Self {
            primary_topic: ERROR_TOPIC.to_string(),
            topics: vec![ERROR_TOPIC.to_string()],
            samples: ContentSamples {
                title,
                paragraphs: vec![ERROR_PLACEHOLDER.to_string()],
                ..ContentSamples::default()
            },
            language,
            ..Self::default()
        }
    }

    /// Whether this profile is the canned error-page profile.
    #[must_use]
    pub fn is_error_page(&self) -> bool {
        self.primary_topic == ERROR_TOPIC
            && matches!(self.samples.paragraphs.as_slice(), [only] if only == ERROR_PLACEHOLDER)
    }
}
