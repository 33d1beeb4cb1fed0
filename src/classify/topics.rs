//! Topic analysis over the title and headings.

use std::collections::HashMap;

use crate::fields::push_unique;
use crate::options::Limits;
use crate::patterns::{STOP_WORDS, TITLE_TOKEN_SPLIT, TOPIC_FAMILIES};
use crate::profile::{Heading, DEFAULT_TOPIC};

/// Words taken from the title for the primary topic.
const PRIMARY_TOPIC_TOKENS: usize = 3;

/// Primary topic, ordered topic list and key terms of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub primary_topic: String,
    pub topics: Vec<String>,
    pub key_terms: Vec<String>,
}

impl Default for TopicSummary {
    fn default() -> Self {
        Self {
            primary_topic: DEFAULT_TOPIC.to_string(),
            topics: vec![DEFAULT_TOPIC.to_string()],
            key_terms: Vec::new(),
        }
    }
}

/// Derive topics from the title and heading texts.
///
/// Key terms are the most frequent content words (longer than three
/// characters, not stop words, not numbers), ties broken by first
/// occurrence. Topics start with the primary topic, followed by the labels
/// of any matching keyword family and then the key terms.
#[must_use]
pub fn analyze_topics(title: &str, headings: &[Heading], limits: &Limits) -> TopicSummary {
    let mut corpus = String::from(title);
    for heading in headings {
        corpus.push(' ');
        corpus.push_str(&heading.text);
    }

    let key_terms = rank_words(&corpus, limits.max_key_terms);
    let primary_topic = primary_topic(title)
        .or_else(|| key_terms.first().cloned())
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    let cap = limits.max_topics.max(1);
    let mut topics = vec![primary_topic.clone()];
    for (pattern, label) in TOPIC_FAMILIES.iter() {
        if topics.len() >= cap {
            break;
        }
        if pattern.is_match(&corpus) {
            push_unique(&mut topics, label, cap);
        }
    }
    for term in &key_terms {
        if topics.len() >= cap {
            break;
        }
        push_unique(&mut topics, term, cap);
    }

    tracing::trace!(primary = %primary_topic, topics = topics.len(), "topics analyzed");

    TopicSummary {
        primary_topic,
        topics,
        key_terms,
    }
}

/// First few title tokens joined by spaces, if the title has any words.
fn primary_topic(title: &str) -> Option<String> {
    let tokens: Vec<&str> = TITLE_TOKEN_SPLIT
        .split(title.trim())
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .take(PRIMARY_TOPIC_TOKENS)
        .collect();
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

fn rank_words(corpus: &str, n: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for raw in corpus.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if !is_content_word(&word) {
            continue;
        }
        if let Some(&slot) = index.get(&word) {
            counts[slot].1 += 1;
        } else {
            index.insert(word.clone(), counts.len());
            counts.push((word, 1));
        }
    }

    // Stable sort keeps first-occurrence order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(n).map(|(word, _)| word).collect()
}

fn is_content_word(word: &str) -> bool {
    word.chars().count() > 3
        && !word.chars().all(char::is_numeric)
        && !STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> Heading {
        Heading {
            level: 2,
            text: text.to_string(),
            trailing_content: String::new(),
        }
    }

    #[test]
    fn primary_topic_is_first_three_title_tokens() {
        let summary = analyze_topics(
            "Online Payments Platform | Example",
            &[],
            &Limits::default(),
        );
        assert_eq!(summary.primary_topic, "Online Payments Platform");
        assert_eq!(summary.topics[0], "Online Payments Platform");
        assert_eq!(summary.topics[1], "payment processing");
    }

    #[test]
    fn dash_separators_are_not_tokens() {
        assert_eq!(
            primary_topic("Rust - A Language").as_deref(),
            Some("Rust A Language")
        );
    }

    #[test]
    fn falls_back_to_top_word_then_default() {
        let summary = analyze_topics(
            "",
            &[heading("Gardening tips"), heading("Gardening tools")],
            &Limits::default(),
        );
        assert_eq!(summary.primary_topic, "gardening");

        let empty = analyze_topics("", &[], &Limits::default());
        assert_eq!(empty.primary_topic, DEFAULT_TOPIC);
        assert_eq!(empty.topics, vec![DEFAULT_TOPIC.to_string()]);
        assert!(empty.key_terms.is_empty());
    }

    #[test]
    fn key_terms_rank_by_frequency_then_first_seen() {
        let terms = rank_words("zebra apple mango apple mango apple 2024 this the", 10);
        assert_eq!(terms, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn topics_are_unique_and_capped() {
        let headings: Vec<Heading> = [
            "checkout cart api blog",
            "alpha bravo charlie delta echo",
            "foxtrot golf hotel india",
        ]
        .iter()
        .map(|t| heading(t))
        .collect();
        let summary = analyze_topics("Alpha", &headings, &Limits::default());
        assert_eq!(summary.topics.len(), 5);
        assert_eq!(summary.topics[0], "Alpha");
        assert!(!summary.topics[1..].iter().any(|t| t.eq_ignore_ascii_case("alpha")));
    }
}
