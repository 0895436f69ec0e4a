//! Predicates over the requested type and the current permutation.
//!
//! A [`Condition`] is evaluated against a [`RebindContext`] and the name of
//! the type being rebound. Three outcomes are possible:
//!
//! - `Ok(true)` / `Ok(false)`: the predicate holds or does not
//! - `Ok(false)` plus a warning: an assignability target no longer exists;
//!   stale rules are tolerated
//! - `Err(RebindError)`: the requested type itself is unknown, or a property
//!   lookup failed; resolution for this type is aborted
//!
//! Compound conditions visit children in insertion order and stop at the
//! first child that decides the result.

use std::fmt;

use indexmap::IndexSet;

use crate::conditions::Conditions;
use crate::context::RebindContext;
use crate::error::{RebindError, RebindResult};

/// A deferred-binding predicate.
///
/// ```
/// use rebind_rules::Condition;
///
/// let cond = Condition::any([
///     Condition::when_type_is("com.foo.Widget"),
///     Condition::when_property_is("user.agent", "safari"),
/// ]);
/// assert_eq!(cond.required_properties().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The requested type has exactly this name.
    WhenTypeIs(String),

    /// The requested type is assignable to this type.
    WhenTypeAssignableTo(String),

    /// A binding property currently has this value.
    WhenPropertyIs {
        /// Binding property name.
        property: String,
        /// Expected value.
        value: String,
    },

    /// Every child holds. Empty is true.
    All(Conditions),

    /// At least one child holds. Empty is false.
    Any(Conditions),

    /// No child holds. Empty is true.
    NoneOf(Conditions),
}

impl Condition {
    /// `<when-type-is class=name/>`
    pub fn when_type_is(name: impl Into<String>) -> Self {
        Self::WhenTypeIs(name.into())
    }

    /// `<when-type-assignable class=name/>`
    pub fn when_type_assignable_to(name: impl Into<String>) -> Self {
        Self::WhenTypeAssignableTo(name.into())
    }

    /// `<when-property-is name=property value=value/>`
    pub fn when_property_is(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::WhenPropertyIs {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Logical AND over `children`.
    pub fn all(children: impl IntoIterator<Item = Condition>) -> Self {
        Self::All(children.into_iter().collect())
    }

    /// Logical OR over `children`.
    pub fn any(children: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(children.into_iter().collect())
    }

    /// Logical NOR over `children`.
    pub fn none_of(children: impl IntoIterator<Item = Condition>) -> Self {
        Self::NoneOf(children.into_iter().collect())
    }

    /// Evaluate for `type_name`, logging the before/after diagnostics.
    pub fn is_true(&self, ctx: &RebindContext<'_>, type_name: &str) -> RebindResult<bool> {
        let span = tracing::debug_span!("condition", check = %self.eval_before_message(type_name));
        let _guard = span.enter();

        let result = self.eval(ctx, type_name)?;
        tracing::debug!(result, "{}", self.eval_after_message(type_name, result));
        Ok(result)
    }

    fn eval(&self, ctx: &RebindContext<'_>, type_name: &str) -> RebindResult<bool> {
        match self {
            Self::WhenTypeIs(name) => Ok(type_name == name),

            Self::WhenTypeAssignableTo(target) => {
                let types = ctx.types();
                let Some(from) = types.find_type(type_name) else {
                    tracing::error!(type_name, "unable to find requested type");
                    return Err(RebindError::UnresolvedType(type_name.to_owned()));
                };
                let Some(to) = types.find_type(target) else {
                    tracing::warn!(
                        target_type = %target,
                        "unknown type specified in deferred binding rule"
                    );
                    return Ok(false);
                };
                Ok(types.is_assignable(from, to))
            }

            Self::WhenPropertyIs { property, value } => {
                let current = ctx.properties().selection_value(property)?;
                Ok(current == *value)
            }

            Self::All(children) => {
                for child in children {
                    if !child.is_true(ctx, type_name)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Self::Any(children) => {
                for child in children {
                    if child.is_true(ctx, type_name)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Self::NoneOf(children) => {
                for child in children {
                    if child.is_true(ctx, type_name)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }

    /// Diagnostic logged before evaluation.
    pub fn eval_before_message(&self, type_name: &str) -> String {
        match self {
            Self::WhenTypeIs(name) => {
                format!("Checking if requested type '{type_name}' is exactly '{name}'")
            }
            Self::WhenTypeAssignableTo(name) => {
                format!("Checking if requested type '{type_name}' is assignable to '{name}'")
            }
            Self::WhenPropertyIs { property, value } => {
                format!("Checking if property '{property}' is '{value}'")
            }
            Self::All(_) => "Checking if all subconditions are true (<all>)".to_owned(),
            Self::Any(_) => "Checking if any subcondition is true (<any>)".to_owned(),
            Self::NoneOf(_) => "Checking if none of the subconditions are true (<none>)".to_owned(),
        }
    }

    /// Diagnostic logged after evaluation.
    pub fn eval_after_message(&self, type_name: &str, result: bool) -> String {
        match (self, result) {
            (Self::WhenTypeIs(_), true) => format!("Yes, '{type_name}' is an exact match"),
            (Self::WhenTypeIs(_), false) => format!("No, '{type_name}' is not an exact match"),
            (Self::WhenTypeAssignableTo(_), true) => format!("Yes, '{type_name}' is assignable"),
            (Self::WhenTypeAssignableTo(_), false) => format!("No, '{type_name}' is not assignable"),
            (Self::WhenPropertyIs { .. }, true) => "Property value matched".to_owned(),
            (Self::WhenPropertyIs { .. }, false) => "Property value did not match".to_owned(),
            (Self::All(_), true) => "Yes: All subconditions were true".to_owned(),
            (Self::All(_), false) => "No: One or more subconditions was false".to_owned(),
            (Self::Any(_), true) => "Yes: At least one subcondition was true".to_owned(),
            (Self::Any(_), false) => "No: All subconditions were false".to_owned(),
            (Self::NoneOf(_), true) => "Yes: None of the subconditions were true".to_owned(),
            (Self::NoneOf(_), false) => "No: One or more subconditions was true".to_owned(),
        }
    }

    /// Properties the oracle must provide before this condition is evaluated.
    pub fn required_properties(&self) -> IndexSet<String> {
        let mut out = IndexSet::new();
        self.collect_required(&mut out);
        out
    }

    pub(crate) fn collect_required(&self, out: &mut IndexSet<String>) {
        match self {
            Self::WhenPropertyIs { property, .. } => {
                out.insert(property.clone());
            }
            Self::All(children) | Self::Any(children) | Self::NoneOf(children) => {
                for child in children {
                    child.collect_required(out);
                }
            }
            Self::WhenTypeIs(_) | Self::WhenTypeAssignableTo(_) => {}
        }
    }
}

fn fmt_children(f: &mut fmt::Formatter<'_>, tag: &str, children: &Conditions) -> fmt::Result {
    write!(f, "<{tag}>")?;
    for child in children {
        write!(f, "{child}")?;
    }
    write!(f, "</{tag}>")
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WhenTypeIs(name) => write!(f, "<when-type-is class='{name}'/>"),
            Self::WhenTypeAssignableTo(name) => write!(f, "<when-type-assignable class='{name}'/>"),
            Self::WhenPropertyIs { property, value } => {
                write!(f, "<when-property-is name='{property}' value='{value}'/>")
            }
            Self::All(children) => fmt_children(f, "all", children),
            Self::Any(children) => fmt_children(f, "any", children),
            Self::NoneOf(children) => fmt_children(f, "none", children),
        }
    }
}
