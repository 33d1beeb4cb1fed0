//! Ordered (predicate, label) rule tables.

/// A named rule: when `applies` holds, the input is labelled `label`.
pub struct Rule<S: ?Sized, L> {
    pub name: &'static str,
    pub label: L,
    pub applies: fn(&S) -> bool,
}

/// Evaluate `rules` in order and return the label of the first match.
///
/// Evaluation short-circuits, so later (possibly expensive) predicates only
/// run when every earlier rule declined.
pub fn first_match<S: ?Sized, L: Copy>(rules: &[Rule<S, L>], signals: &S) -> Option<L> {
    rules.iter().find_map(|rule| {
        if (rule.applies)(signals) {
            tracing::trace!(rule = rule.name, "classification rule matched");
            Some(rule.label)
        } else {
            None
        }
    })
}
