//! Ordered, append-only list of conditions.

use std::slice;

use indexmap::IndexSet;

use crate::condition::Condition;

/// Children of a compound condition, or the root of a rule.
///
/// Assembled once while a module is loaded; there is no removal API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions {
    list: Vec<Condition>,
}

impl Conditions {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition.
    pub fn add(&mut self, condition: Condition) {
        self.list.push(condition);
    }

    /// Conditions in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Condition> {
        self.list.iter()
    }

    /// Number of conditions.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Union of every child's required properties, first-seen order.
    pub fn required_properties(&self) -> IndexSet<String> {
        let mut out = IndexSet::new();
        for condition in &self.list {
            condition.collect_required(&mut out);
        }
        out
    }
}

impl<'a> IntoIterator for &'a Conditions {
    type Item = &'a Condition;
    type IntoIter = slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl FromIterator<Condition> for Conditions {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl Extend<Condition> for Conditions {
    fn extend<I: IntoIterator<Item = Condition>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_order() {
        let mut conditions = Conditions::new();
        conditions.add(Condition::when_type_is("a.A"));
        conditions.add(Condition::when_type_is("a.B"));
        conditions.add(Condition::when_type_assignable_to("a.C"));

        let rendered: Vec<String> = conditions.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "<when-type-is class='a.A'/>",
                "<when-type-is class='a.B'/>",
                "<when-type-assignable class='a.C'/>",
            ]
        );
    }

    #[test]
    fn required_properties_deduplicate() {
        let conditions: Conditions = [
            Condition::when_property_is("user.agent", "safari"),
            Condition::when_type_is("a.A"),
            Condition::when_property_is("locale", "en"),
            Condition::when_property_is("user.agent", "ie9"),
        ]
        .into_iter()
        .collect();

        let required: Vec<String> = conditions.required_properties().into_iter().collect();
        assert_eq!(required, ["user.agent", "locale"]);
    }
}
