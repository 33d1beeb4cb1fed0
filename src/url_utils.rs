//! Page URL decomposition.
//!
//! The classifiers only need the lower-cased path, the raw query and the
//! host of the page URL. Callers hand us whatever they fetched, so absolute,
//! root-relative and scheme-less forms are all accepted, and anything that
//! still fails to parse degrades to an empty location rather than an error.

use url::Url;

/// Second-level labels that sit under a country-code TLD (`example.co.uk`).
const SECOND_LEVEL_LABELS: &[&str] = &["co", "com", "org", "net", "ac", "gov", "edu"];

/// Base used to resolve root-relative URLs.
const RELATIVE_BASE: &str = "http://relative.invalid";

/// Path, query and host of a page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    /// Lower-cased path; empty when no URL was supplied.
    pub path: String,
    /// Query string without the leading `?`.
    pub query: String,
    /// Lower-cased host; empty for relative URLs.
    pub host: String,
}

impl PageLocation {
    /// Decompose an optional page URL. Never fails.
    #[must_use]
    pub fn parse(url: Option<&str>) -> Self {
        let Some(raw) = url.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        if let Some(parsed) = parse_lenient(raw) {
            return Self::from_url(&parsed);
        }

        tracing::debug!(url = raw, "unparseable page URL; splitting by hand");
        let without_fragment = raw.split('#').next().unwrap_or_default();
        let (path, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));
        Self {
            path: path.to_lowercase(),
            query: query.to_string(),
            host: String::new(),
        }
    }

    fn from_url(url: &Url) -> Self {
        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
        Self {
            path: url.path().to_lowercase(),
            query: url.query().unwrap_or_default().to_string(),
            host: if host == "relative.invalid" {
                String::new()
            } else {
                host
            },
        }
    }

    /// Non-empty lower-cased path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }

    /// The registered-domain label of the host, e.g. `example` for
    /// `www.example.co.uk`.
    #[must_use]
    pub fn site_label(&self) -> Option<&str> {
        let host = self.host.strip_prefix("www.").unwrap_or(&self.host);
        let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();

        let label = match labels.as_slice() {
            [] => return None,
            [only] => *only,
            [.., sld, second, tld]
                if tld.len() == 2 && SECOND_LEVEL_LABELS.contains(second) =>
            {
                *sld
            }
            [.., name, _tld] => *name,
        };

        if label.chars().all(|c| c.is_ascii_digit()) {
            None
        } else {
            Some(label)
        }
    }
}

fn parse_lenient(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) if url.has_host() => Some(url),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            if raw.starts_with('/') {
                Url::parse(RELATIVE_BASE).ok()?.join(raw).ok()
            } else if looks_like_host(raw) {
                Url::parse(&format!("http://{raw}")).ok()
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

/// `example.com/path` style input: a dotted first segment with no spaces.
fn looks_like_host(raw: &str) -> bool {
    let first = raw.split(['/', '?', '#']).next().unwrap_or_default();
    first.contains('.') && !first.starts_with('.') && !first.contains(char::is_whitespace)
}
