//! The per-module property table.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::binding::{BindingProperty, validate_identifier};
use crate::configuration::ConfigurationProperty;
use crate::error::{PropertyError, PropertyResult};

/// Either kind of module property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    /// Participates in deferred-binding decisions.
    Binding(BindingProperty),
    /// Plain string setting read by generators and linkers.
    Configuration(ConfigurationProperty),
}

impl Property {
    /// The property name.
    pub fn name(&self) -> &str {
        match self {
            Self::Binding(p) => p.name(),
            Self::Configuration(p) => p.name(),
        }
    }

    /// `"binding"` or `"configuration"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Binding(_) => "binding",
            Self::Configuration(_) => "configuration",
        }
    }
}

/// All properties declared by a module, in declaration order.
///
/// ```
/// use rebind_property::Properties;
///
/// let mut props = Properties::new();
/// props.create_binding("user.agent").unwrap().define_value("safari").unwrap();
/// props.create_configuration("locale.cookie", false).unwrap();
///
/// assert_eq!(props.len(), 2);
/// assert!(props.binding("user.agent").is_some());
/// assert!(props.configuration("user.agent").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    map: IndexMap<String, Property>,
}

impl Properties {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a binding property, or return the existing one.
    pub fn create_binding(&mut self, name: &str) -> PropertyResult<&mut BindingProperty> {
        match self.map.entry(name.to_owned()) {
            Entry::Occupied(entry) => match entry.into_mut() {
                Property::Binding(p) => Ok(p),
                other => Err(PropertyError::KindMismatch {
                    name: name.to_owned(),
                    existing: other.kind(),
                }),
            },
            Entry::Vacant(entry) => {
                let prop = BindingProperty::new(name)?;
                match entry.insert(Property::Binding(prop)) {
                    Property::Binding(p) => Ok(p),
                    Property::Configuration(_) => unreachable!("just inserted a binding property"),
                }
            }
        }
    }

    /// Declare a configuration property, or return the existing one.
    ///
    /// Redeclaring keeps the original `allows_multiple` flag and values.
    pub fn create_configuration(
        &mut self,
        name: &str,
        allows_multiple: bool,
    ) -> PropertyResult<&mut ConfigurationProperty> {
        match self.map.entry(name.to_owned()) {
            Entry::Occupied(entry) => match entry.into_mut() {
                Property::Configuration(p) => Ok(p),
                other => Err(PropertyError::KindMismatch {
                    name: name.to_owned(),
                    existing: other.kind(),
                }),
            },
            Entry::Vacant(entry) => {
                validate_identifier(name)?;
                let prop = ConfigurationProperty::new(name, allows_multiple);
                match entry.insert(Property::Configuration(prop)) {
                    Property::Configuration(p) => Ok(p),
                    Property::Binding(_) => unreachable!("just inserted a configuration property"),
                }
            }
        }
    }

    /// Look up a property of either kind.
    pub fn find(&self, name: &str) -> Option<&Property> {
        self.map.get(name)
    }

    /// Look up a binding property.
    pub fn binding(&self, name: &str) -> Option<&BindingProperty> {
        match self.map.get(name)? {
            Property::Binding(p) => Some(p),
            Property::Configuration(_) => None,
        }
    }

    /// Look up a binding property for modification.
    pub fn binding_mut(&mut self, name: &str) -> PropertyResult<&mut BindingProperty> {
        match self.map.get_mut(name) {
            Some(Property::Binding(p)) => Ok(p),
            Some(other) => Err(PropertyError::KindMismatch {
                name: name.to_owned(),
                existing: other.kind(),
            }),
            None => Err(PropertyError::Unknown(name.to_owned())),
        }
    }

    /// Look up a configuration property.
    pub fn configuration(&self, name: &str) -> Option<&ConfigurationProperty> {
        match self.map.get(name)? {
            Property::Configuration(p) => Some(p),
            Property::Binding(_) => None,
        }
    }

    /// Look up a configuration property for modification.
    pub fn configuration_mut(&mut self, name: &str) -> PropertyResult<&mut ConfigurationProperty> {
        match self.map.get_mut(name) {
            Some(Property::Configuration(p)) => Ok(p),
            Some(other) => Err(PropertyError::KindMismatch {
                name: name.to_owned(),
                existing: other.kind(),
            }),
            None => Err(PropertyError::Unknown(name.to_owned())),
        }
    }

    /// Whether a property of either kind is declared under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// All properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.map.values()
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_binding_returns_existing() {
        let mut props = Properties::new();
        props.create_binding("ua").unwrap().define_value("safari").unwrap();
        let again = props.create_binding("ua").unwrap();
        assert!(again.is_allowed("safari"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let mut props = Properties::new();
        props.create_binding("ua").unwrap();
        let err = props.create_configuration("ua", false).unwrap_err();
        assert_eq!(
            err,
            PropertyError::KindMismatch {
                name: "ua".into(),
                existing: "binding"
            }
        );

        props.create_configuration("cfg", true).unwrap();
        assert!(props.create_binding("cfg").is_err());
    }

    #[test]
    fn redeclaring_configuration_keeps_flag() {
        let mut props = Properties::new();
        props.create_configuration("c", true).unwrap().add_value("x").unwrap();
        let again = props.create_configuration("c", false).unwrap();
        assert!(again.allows_multiple_values());
        assert_eq!(again.values(), vec![Some("x".to_string())]);
    }

    #[test]
    fn invalid_names_are_rejected() {
        let mut props = Properties::new();
        assert!(props.create_configuration("not valid", false).is_err());
        assert!(props.create_binding("9lives").is_err());
        assert!(props.is_empty());
    }

    #[test]
    fn mut_lookups_report_unknown() {
        let mut props = Properties::new();
        assert_eq!(
            props.binding_mut("x").unwrap_err(),
            PropertyError::Unknown("x".into())
        );
        assert_eq!(
            props.configuration_mut("x").unwrap_err(),
            PropertyError::Unknown("x".into())
        );
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let mut props = Properties::new();
        props.create_configuration("b", false).unwrap();
        props.create_binding("a").unwrap();
        props.create_configuration("c", true).unwrap();
        let names: Vec<_> = props.iter().map(Property::name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
