//! Page-type classification from the URL path and DOM structure.
//!
//! URL evidence is consulted before DOM evidence within each rule, and the
//! rules themselves run in a fixed order: home paths, homepage structure,
//! article, product, category, about, contact, documentation, search.

use super::rules::{first_match, Rule};
use crate::dom::{self, Document};
use crate::patterns::{
    ABOUT_PATH_SEGMENTS, ARTICLE_MARKERS, ARTICLE_PATH_SEGMENTS, CATEGORY_PATH_SEGMENTS,
    CONTACT_FORM_MARKERS, CONTACT_PATH_SEGMENTS, DATE_PATH, DOCS_MARKERS, DOCS_PATH_SEGMENTS,
    HERO_MARKERS, HOME_NAV_LINKS, HOME_PATHS, LISTING_MARKERS, PRODUCT_DETAIL_MARKERS,
    PRODUCT_PATH_SEGMENTS, SEARCH_PATH_SEGMENTS, SEARCH_QUERY_PARAM, SEARCH_RESULT_MARKERS,
};
use crate::profile::PageType;
use crate::url_utils::PageLocation;

/// Slash-free paths shorter than this are probed for homepage structure.
const SHORT_PATH_CHARS: usize = 20;

/// Four sibling sections, i.e. more than three.
const SECTION_RUN: &str = "section ~ section ~ section ~ section";

/// Inputs consulted by the page-type rules.
pub struct PageSignals<'a> {
    pub location: &'a PageLocation,
    pub document: &'a Document,
    pub title: &'a str,
}

impl PageSignals<'_> {
    fn path(&self) -> &str {
        &self.location.path
    }

    fn is_homepage_candidate(&self) -> bool {
        let path = self.path();
        path.chars().count() <= 1
            || (path.chars().count() < SHORT_PATH_CHARS && !path.contains('/'))
    }

    fn has_homepage_structure(&self) -> bool {
        dom::has_match(self.document, HERO_MARKERS)
            || dom::has_match(self.document, SECTION_RUN)
            || dom::has_match(self.document, HOME_NAV_LINKS)
            || self.title_names_site()
    }

    fn title_names_site(&self) -> bool {
        match self.location.site_label() {
            Some(label) => self.title.to_lowercase().contains(label),
            None => false,
        }
    }

    /// Whether the path contains `/{segment}/` for any of `segments`.
    fn path_contains_dir(&self, segments: &[&str]) -> bool {
        let path = self.path();
        segments.iter().any(|segment| {
            path.match_indices(segment).any(|(at, _)| {
                path[..at].ends_with('/') && path[at + segment.len()..].starts_with('/')
            })
        })
    }

    /// Whether any path segment is, or starts with, one of `markers`.
    fn path_has_segment(&self, markers: &[&str]) -> bool {
        self.location
            .segments()
            .any(|segment| markers.iter().any(|marker| segment_matches(segment, marker)))
    }
}

/// `products` matches `products` and `products-2024` but not `productsale`.
fn segment_matches(segment: &str, marker: &str) -> bool {
    segment
        .strip_prefix(marker)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(['-', '_', '.']))
}

fn page_rules<'a>() -> [Rule<PageSignals<'a>, PageType>; 9] {
    [
        Rule {
            name: "home-path",
            label: PageType::Homepage,
            applies: |s| HOME_PATHS.contains(&s.path()),
        },
        Rule {
            name: "homepage-structure",
            label: PageType::Homepage,
            applies: |s| s.is_homepage_candidate() && s.has_homepage_structure(),
        },
        Rule {
            name: "article",
            label: PageType::Article,
            applies: |s| {
                s.path_contains_dir(ARTICLE_PATH_SEGMENTS)
                    || DATE_PATH.is_match(s.path())
                    || dom::has_match(s.document, ARTICLE_MARKERS)
            },
        },
        Rule {
            name: "product",
            label: PageType::Product,
            applies: |s| {
                s.path_has_segment(PRODUCT_PATH_SEGMENTS)
                    || dom::has_match(s.document, PRODUCT_DETAIL_MARKERS)
            },
        },
        Rule {
            name: "category",
            label: PageType::Category,
            applies: |s| {
                s.path_has_segment(CATEGORY_PATH_SEGMENTS)
                    || dom::has_match(s.document, LISTING_MARKERS)
            },
        },
        Rule {
            name: "about",
            label: PageType::About,
            applies: |s| s.path_has_segment(ABOUT_PATH_SEGMENTS),
        },
        Rule {
            name: "contact",
            label: PageType::Contact,
            applies: |s| {
                s.path_has_segment(CONTACT_PATH_SEGMENTS)
                    || dom::has_match(s.document, CONTACT_FORM_MARKERS)
            },
        },
        Rule {
            name: "documentation",
            label: PageType::Documentation,
            applies: |s| {
                s.path_has_segment(DOCS_PATH_SEGMENTS) || dom::has_match(s.document, DOCS_MARKERS)
            },
        },
        Rule {
            name: "search",
            label: PageType::Search,
            applies: |s| {
                s.path_has_segment(SEARCH_PATH_SEGMENTS)
                    || SEARCH_QUERY_PARAM.is_match(&s.location.query)
                    || dom::has_match(s.document, SEARCH_RESULT_MARKERS)
            },
        },
    ]
}

/// Assign exactly one page type. [`PageType::General`] when no rule fires.
#[must_use]
pub fn classify_page_type(signals: &PageSignals<'_>) -> PageType {
    first_match(&page_rules(), signals).unwrap_or_default()
}
