//! Topic, business-type and page-type classification.
//!
//! Business and page types are decided by explicit ordered rule tables
//! ([`rules::first_match`]): the first rule whose predicate holds wins, and
//! each predicate can be tested on its own.

pub mod business;
pub mod page_type;
pub mod rules;
pub mod topics;

pub use business::classify_business;
pub use page_type::classify_page_type;
pub use rules::{first_match, Rule};
pub use topics::{analyze_topics, TopicSummary};
