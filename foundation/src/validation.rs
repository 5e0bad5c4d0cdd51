//! Ordered validation rules.

/// A single rule: a predicate that must hold, and what to report if it doesn't.
pub struct Rule<T: ?Sized, V> {
    holds: fn(&T) -> bool,
    violation: V,
}

/// An ordered chain of rules for one field.
///
/// Rules are checked in the order they were added and only the first violated
/// rule is reported. Predicates receive the whole value being validated, so a
/// rule for one field may look at its siblings.
pub struct Rules<T: ?Sized, V> {
    rules: Vec<Rule<T, V>>,
}

impl<T: ?Sized, V> Rules<T, V> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule that reports `violation` when `holds` returns false.
    pub fn must(mut self, holds: fn(&T) -> bool, violation: V) -> Self {
        self.rules.push(Rule { holds, violation });
        self
    }

    /// Returns the violation of the first rule that doesn't hold, if any.
    pub fn first_violation(&self, value: &T) -> Option<&V> {
        self.rules
            .iter()
            .find(|rule| !(rule.holds)(value))
            .map(|rule| &rule.violation)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized, V> Default for Rules<T, V> {
    fn default() -> Self {
        Self::new()
    }
}
