//! Read-only property lookup used during rule evaluation.

use std::collections::HashMap;

use crate::error::{PropertyError, PropertyResult};
use crate::properties::{Properties, Property};

/// Answers property questions for one permutation.
///
/// Implementations must be pure reads: conditions may be evaluated in any
/// order and any number of times against the same oracle.
pub trait PropertyOracle {
    /// The selected value of a binding property.
    fn selection_value(&self, name: &str) -> PropertyResult<String>;

    /// The set values of a configuration property, in insertion order.
    fn configuration_values(&self, name: &str) -> PropertyResult<Vec<String>>;

    /// Whether the oracle knows a property by this name.
    fn has_property(&self, name: &str) -> bool;
}

/// A [`PropertyOracle`] over a module's [`Properties`] and one set of selections.
///
/// ```
/// use rebind_property::{Properties, PropertyOracle, StaticPropertyOracle};
///
/// let mut props = Properties::new();
/// let ua = props.create_binding("user.agent").unwrap();
/// ua.define_value("safari").unwrap();
/// ua.define_value("gecko1_8").unwrap();
///
/// let oracle = StaticPropertyOracle::new(&props).with_selection("user.agent", "gecko1_8");
/// assert_eq!(oracle.selection_value("user.agent").unwrap(), "gecko1_8");
/// ```
#[derive(Debug, Clone)]
pub struct StaticPropertyOracle<'a> {
    properties: &'a Properties,
    selections: HashMap<String, String>,
}

impl<'a> StaticPropertyOracle<'a> {
    /// An oracle with no explicit selections.
    pub fn new(properties: &'a Properties) -> Self {
        Self {
            properties,
            selections: HashMap::new(),
        }
    }

    /// Select `value` for binding property `name`.
    pub fn with_selection(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.select(name, value);
        self
    }

    /// Select `value` for binding property `name`, replacing any earlier selection.
    pub fn select(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.selections.insert(name.into(), value.into());
    }

    /// The underlying property table.
    pub fn properties(&self) -> &'a Properties {
        self.properties
    }
}

impl PropertyOracle for StaticPropertyOracle<'_> {
    fn selection_value(&self, name: &str) -> PropertyResult<String> {
        let prop = match self.properties.find(name) {
            Some(Property::Binding(p)) => p,
            Some(other) => {
                return Err(PropertyError::KindMismatch {
                    name: name.to_owned(),
                    existing: other.kind(),
                });
            }
            None => return Err(PropertyError::Unknown(name.to_owned())),
        };

        if let Some(selected) = self.selections.get(name) {
            return if prop.is_allowed(selected) {
                Ok(selected.clone())
            } else {
                Err(PropertyError::ValueNotAllowed {
                    name: name.to_owned(),
                    value: selected.clone(),
                })
            };
        }

        prop.constrained_value()
            .or_else(|| prop.fallback())
            .map(str::to_owned)
            .ok_or_else(|| PropertyError::NoValue(name.to_owned()))
    }

    fn configuration_values(&self, name: &str) -> PropertyResult<Vec<String>> {
        match self.properties.find(name) {
            Some(Property::Configuration(p)) => Ok(p.values().into_iter().flatten().collect()),
            Some(other) => Err(PropertyError::KindMismatch {
                name: name.to_owned(),
                existing: other.kind(),
            }),
            None => Err(PropertyError::Unknown(name.to_owned())),
        }
    }

    fn has_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }
}
