//! Binding properties: the axes deferred-binding decisions are made on.

use indexmap::IndexSet;

use crate::error::{PropertyError, PropertyResult};

/// A property whose value selects between implementations, e.g. `user.agent`.
///
/// Values are declared up front with [`define_value`](Self::define_value).
/// The allowed set starts equal to the defined set and can be narrowed with
/// [`set_allowed_values`](Self::set_allowed_values).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingProperty {
    name: String,
    defined: IndexSet<String>,
    allowed: IndexSet<String>,
    fallback: Option<String>,
}

impl BindingProperty {
    /// Declare a binding property with no values yet.
    pub fn new(name: impl Into<String>) -> PropertyResult<Self> {
        let name = name.into();
        validate_identifier(&name)?;
        Ok(Self {
            name,
            defined: IndexSet::new(),
            allowed: IndexSet::new(),
            fallback: None,
        })
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Define a value; it also becomes allowed.
    pub fn define_value(&mut self, value: impl Into<String>) -> PropertyResult<()> {
        let value = value.into();
        validate_identifier(&value)?;
        self.defined.insert(value.clone());
        self.allowed.insert(value);
        Ok(())
    }

    /// Restrict the allowed values. Every value must already be defined.
    pub fn set_allowed_values<I, S>(&mut self, values: I) -> PropertyResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut allowed = IndexSet::new();
        for value in values {
            let value = value.into();
            if !self.defined.contains(&value) {
                return Err(PropertyError::UndefinedValue {
                    name: self.name.clone(),
                    value,
                });
            }
            allowed.insert(value);
        }
        self.allowed = allowed;
        Ok(())
    }

    /// Set the value used when nothing else selects one.
    pub fn set_fallback(&mut self, value: impl Into<String>) -> PropertyResult<()> {
        let value = value.into();
        validate_identifier(&value)?;
        self.fallback = Some(value);
        Ok(())
    }

    /// The fallback value, if any.
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Defined values in declaration order.
    pub fn defined_values(&self) -> impl Iterator<Item = &str> {
        self.defined.iter().map(String::as_str)
    }

    /// Allowed values in declaration order.
    pub fn allowed_values(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    /// Whether `value` is currently allowed.
    pub fn is_allowed(&self, value: &str) -> bool {
        self.allowed.contains(value)
    }

    /// The only allowed value, when exactly one remains.
    pub fn constrained_value(&self) -> Option<&str> {
        if self.allowed.len() == 1 {
            self.allowed.first().map(String::as_str)
        } else {
            None
        }
    }
}

/// Property names and binding values: `[A-Za-z_][A-Za-z0-9_.-]*`.
pub(crate) fn validate_identifier(s: &str) -> PropertyResult<()> {
    let mut chars = s.chars();
    let valid_head = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if valid_head && valid_tail {
        Ok(())
    } else {
        Err(PropertyError::InvalidName(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_agent() -> BindingProperty {
        let mut prop = BindingProperty::new("user.agent").unwrap();
        for v in ["safari", "gecko1_8", "ie9"] {
            prop.define_value(v).unwrap();
        }
        prop
    }

    #[test]
    fn defined_values_are_allowed() {
        let prop = user_agent();
        assert!(prop.is_allowed("safari"));
        assert_eq!(
            prop.allowed_values().collect::<Vec<_>>(),
            ["safari", "gecko1_8", "ie9"]
        );
        assert_eq!(prop.constrained_value(), None);
    }

    #[test]
    fn restricting_to_one_value_constrains() {
        let mut prop = user_agent();
        prop.set_allowed_values(["gecko1_8"]).unwrap();
        assert_eq!(prop.constrained_value(), Some("gecko1_8"));
        assert!(!prop.is_allowed("safari"));
        assert_eq!(prop.defined_values().count(), 3);
    }

    #[test]
    fn restricting_to_undefined_value_fails() {
        let mut prop = user_agent();
        let err = prop.set_allowed_values(["opera"]).unwrap_err();
        assert_eq!(
            err,
            PropertyError::UndefinedValue {
                name: "user.agent".into(),
                value: "opera".into()
            }
        );
        assert!(prop.is_allowed("safari"));
    }

    #[test]
    fn invalid_identifiers_are_rejected() {
        assert!(BindingProperty::new("1abc").is_err());
        assert!(BindingProperty::new("").is_err());
        assert!(BindingProperty::new("has space").is_err());
        assert!(BindingProperty::new("_ok.name-2").is_ok());
    }

    #[test]
    fn fallback_round_trips() {
        let mut prop = user_agent();
        assert_eq!(prop.fallback(), None);
        prop.set_fallback("safari").unwrap();
        assert_eq!(prop.fallback(), Some("safari"));
    }
}
