//! Statistic detection.
//!
//! Three independent pattern families run over the scan window: percentages,
//! magnitude phrases and currency amounts. Each family keeps at most
//! `max_statistics_per_family` unique matches; the families are then merged
//! in that order, de-duplicated again and capped at `max_statistics`.

use regex::Regex;

use super::push_unique;
use crate::error::Result;
use crate::options::Limits;
use crate::patterns::{CURRENCY, MAGNITUDE, PERCENTAGE};
use crate::text::normalize_whitespace;

/// Extract statistics from already-bounded text.
pub fn extract_statistics(scan_text: &str, limits: &Limits) -> Result<Vec<String>> {
    let families: [&Regex; 3] = [&PERCENTAGE, &MAGNITUDE, &CURRENCY];
    let mut statistics = Vec::new();

    for pattern in families {
        for found in family_matches(pattern, scan_text, limits.max_statistics_per_family) {
            push_unique(&mut statistics, &found, limits.max_statistics);
        }
    }

    Ok(statistics)
}

fn family_matches(pattern: &Regex, text: &str, cap: usize) -> Vec<String> {
    let mut found = Vec::new();
    for m in pattern.find_iter(text) {
        if found.len() >= cap {
            break;
        }
        push_unique(&mut found, &normalize_whitespace(m.as_str()), cap);
    }
    found
}
