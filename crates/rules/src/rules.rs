//! Priority-ordered rule collection and first-match resolution.

use std::collections::VecDeque;
use std::collections::vec_deque;

use indexmap::IndexSet;

use crate::context::RebindContext;
use crate::error::{RebindError, RebindResult};
use crate::rule::Rule;

/// Outcome of resolving one requested type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rebind {
    /// The type to instantiate instead of the requested one.
    pub type_name: String,
    /// Position of the rule that fired, `None` for the identity fallback.
    pub rule_index: Option<usize>,
}

impl Rebind {
    /// Whether no rule applied and the requested type is kept.
    pub fn is_identity(&self) -> bool {
        self.rule_index.is_none()
    }
}

/// Rules in priority order, highest first.
///
/// Modules install rules with [`prepend`](Self::prepend), so a rule declared
/// later overrides the ones declared before it.
///
/// ```
/// use rebind_rules::{Rule, Rules};
///
/// let mut rules = Rules::new();
/// rules.prepend(Rule::replace_with("a.First"));
/// rules.prepend(Rule::replace_with("a.Second"));
/// let order: Vec<String> = rules.iter().map(ToString::to_string).collect();
/// assert_eq!(order[0], "<replace-with class='a.Second'></replace-with>");
/// ```
#[derive(Debug, Default)]
pub struct Rules {
    rules: VecDeque<Rule>,
}

impl Rules {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with the highest priority.
    pub fn prepend(&mut self, rule: Rule) {
        self.rules.push_front(rule);
    }

    /// Insert with the lowest priority.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push_back(rule);
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Rules in evaluation order.
    pub fn iter(&self) -> vec_deque::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Union of every rule's required properties.
    pub fn required_properties(&self) -> IndexSet<String> {
        self.rules
            .iter()
            .flat_map(Rule::required_properties)
            .collect()
    }

    /// Dispose every rule.
    pub fn dispose(&mut self) {
        for rule in &mut self.rules {
            rule.dispose();
        }
    }

    /// Resolve `type_name`: the first applicable rule realizes the answer;
    /// with no applicable rule the requested type is kept.
    ///
    /// Any abort from a condition or from `realize` ends resolution.
    pub fn rebind(&self, ctx: &RebindContext<'_>, type_name: &str) -> RebindResult<Rebind> {
        let span = tracing::debug_span!("rebind", type_name);
        let _guard = span.enter();

        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(property) = rule
                .required_properties()
                .into_iter()
                .find(|p| !ctx.properties().has_property(p))
            {
                return Err(RebindError::MissingProperty {
                    type_name: type_name.to_owned(),
                    property,
                });
            }

            if rule.is_applicable(ctx, type_name)? {
                let replacement = rule.realize(ctx, type_name)?;
                tracing::debug!(rule = index, replacement = %replacement, "rule matched");
                return Ok(Rebind {
                    type_name: replacement,
                    rule_index: Some(index),
                });
            }
        }

        tracing::debug!("no rule matched, keeping requested type");
        Ok(Rebind {
            type_name: type_name.to_owned(),
            rule_index: None,
        })
    }
}

impl<'a> IntoIterator for &'a Rules {
    type Item = &'a Rule;
    type IntoIter = vec_deque::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
