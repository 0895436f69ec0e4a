//! Configuration properties: named, string-valued module settings.

use crate::error::{PropertyError, PropertyResult};

/// A named property holding one or more string values.
///
/// Single-valued properties always start with exactly one unset slot, so
/// [`value`](Self::value) succeeds on a fresh declaration. Properties declared
/// with `allows_multiple = true` start empty and grow through
/// [`add_value`](Self::add_value).
///
/// ```
/// use rebind_property::ConfigurationProperty;
///
/// let mut single = ConfigurationProperty::new("compiler.stackMode", false);
/// assert_eq!(single.value().unwrap(), None);
/// single.set_value("native");
/// assert_eq!(single.value().unwrap(), Some("native"));
///
/// let mut multi = ConfigurationProperty::new("extra.css", true);
/// multi.add_value("a.css").unwrap();
/// multi.add_value("b.css").unwrap();
/// assert!(multi.is_multi_valued());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationProperty {
    name: String,
    allows_multiple: bool,
    values: Vec<Option<String>>,
}

impl ConfigurationProperty {
    /// Declare a property. Single-valued properties get one unset slot.
    pub fn new(name: impl Into<String>, allows_multiple: bool) -> Self {
        let values = if allows_multiple { Vec::new() } else { vec![None] };
        Self {
            name: name.into(),
            allows_multiple,
            values,
        }
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the declaration permits more than one value.
    pub fn allows_multiple_values(&self) -> bool {
        self.allows_multiple
    }

    /// Append a value. Fails on single-valued properties.
    pub fn add_value(&mut self, value: impl Into<String>) -> PropertyResult<()> {
        if !self.allows_multiple {
            return Err(PropertyError::NotMultiValued(self.name.clone()));
        }
        self.values.push(Some(value.into()));
        Ok(())
    }

    /// The sole value, `None` when the slot is unset.
    pub fn value(&self) -> PropertyResult<Option<&str>> {
        match self.values.as_slice() {
            [only] => Ok(only.as_deref()),
            other => Err(PropertyError::NotSingleValued {
                name: self.name.clone(),
                count: other.len(),
            }),
        }
    }

    /// A copy of all values in insertion order.
    pub fn values(&self) -> Vec<Option<String>> {
        self.values.clone()
    }

    /// Replace the first value, or insert it when there are none.
    ///
    /// Works on single-valued properties too: a later declaration overwrites
    /// an earlier one.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = Some(value.into());
        match self.values.first_mut() {
            Some(first) => *first = value,
            None => self.values.push(value),
        }
    }

    /// Replace every value at once.
    pub fn set_values<I, S>(&mut self, values: I) -> PropertyResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<Option<String>> = values.into_iter().map(|v| Some(v.into())).collect();
        if !self.allows_multiple && values.len() > 1 {
            return Err(PropertyError::TooManyValues {
                name: self.name.clone(),
                count: values.len(),
            });
        }
        self.values = values;
        Ok(())
    }

    /// Drop all values. A single-valued property returns to its unset slot.
    pub fn clear(&mut self) {
        self.values.clear();
        if !self.allows_multiple {
            self.values.push(None);
        }
    }

    /// True iff more than one value is stored right now.
    ///
    /// This reflects current state, not the declaration: a property that
    /// allows multiple values but holds one reports `false`.
    pub fn is_multi_valued(&self) -> bool {
        self.values.len() > 1
    }
}
