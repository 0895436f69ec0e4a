//! Serde model of a module file.
//!
//! ```toml
//! name = "com.foo.App"
//!
//! [[property]]
//! kind = "binding"
//! name = "user.agent"
//! values = ["safari", "gecko1_8"]
//!
//! [[configure]]
//! op = "set-property"
//! name = "user.agent"
//! values = ["safari"]
//!
//! [[type]]
//! name = "com.foo.Base"
//!
//! [[rule]]
//! kind = "replace-with"
//! class = "com.foo.BaseImpl"
//! when = [{ when-type-is = "com.foo.Base" }]
//! ```

use serde::Deserialize;

use rebind_rules::{Condition, DeclaredType};

/// A whole module file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ModuleConfig {
    /// Module name, e.g. `com.foo.App`.
    pub name: String,

    /// Property declarations, applied first.
    #[serde(default, rename = "property")]
    pub properties: Vec<PropertyDef>,

    /// Property adjustments, applied in file order after the declarations.
    #[serde(default, rename = "configure")]
    pub directives: Vec<Directive>,

    /// Types known to the module's type oracle.
    #[serde(default, rename = "type")]
    pub types: Vec<TypeDef>,

    /// Rebind rules, lowest priority first.
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleDef>,
}

/// `[[property]]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PropertyDef {
    /// A binding property and its defined values.
    Binding {
        /// Property name.
        name: String,
        /// Defined values.
        #[serde(default)]
        values: Vec<String>,
        /// Optional fallback value.
        #[serde(default)]
        fallback: Option<String>,
    },
    /// A configuration property.
    Configuration {
        /// Property name.
        name: String,
        /// Whether several values may be stored.
        #[serde(default, rename = "multi-valued")]
        multi_valued: bool,
        /// Initial values.
        #[serde(default)]
        values: Vec<String>,
    },
}

/// `[[configure]]`: one property adjustment, selected by `op`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Directive {
    /// Restrict a binding property to a subset of its defined values.
    SetProperty {
        /// Binding property name.
        name: String,
        /// The values left allowed.
        values: Vec<String>,
    },
    /// Set the fallback value of a binding property.
    SetPropertyFallback {
        /// Binding property name.
        name: String,
        /// Fallback value.
        value: String,
    },
    /// Overwrite the first value of a configuration property.
    SetConfigurationProperty {
        /// Configuration property name.
        name: String,
        /// New value.
        value: String,
    },
    /// Append a value to a multi-valued configuration property.
    ExtendConfigurationProperty {
        /// Configuration property name.
        name: String,
        /// Appended value.
        value: String,
    },
    /// Reset a configuration property.
    ClearConfigurationProperty {
        /// Configuration property name.
        name: String,
    },
}

impl Directive {
    /// The property the directive targets.
    pub fn name(&self) -> &str {
        match self {
            Self::SetProperty { name, .. }
            | Self::SetPropertyFallback { name, .. }
            | Self::SetConfigurationProperty { name, .. }
            | Self::ExtendConfigurationProperty { name, .. }
            | Self::ClearConfigurationProperty { name } => name,
        }
    }
}

/// A `name` / `value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValueDef {
    /// Property name.
    pub name: String,
    /// Value.
    pub value: String,
}

/// A bare property name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameDef {
    /// Property name.
    pub name: String,
}

/// Class or interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeKindDef {
    /// A class, extending `java.lang.Object` unless stated otherwise.
    #[default]
    Class,
    /// An interface.
    Interface,
}

/// `[[type]]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDef {
    /// Fully qualified name.
    pub name: String,
    /// Class or interface.
    #[serde(default)]
    pub kind: TypeKindDef,
    /// Superclass (classes) or first super-interface (interfaces).
    #[serde(default)]
    pub extends: Option<String>,
    /// Implemented or extended interfaces.
    #[serde(default)]
    pub implements: Vec<String>,
}

impl TypeDef {
    pub(crate) fn to_declared(&self) -> DeclaredType {
        let mut ty = match self.kind {
            TypeKindDef::Class => DeclaredType::class(&self.name),
            TypeKindDef::Interface => DeclaredType::interface(&self.name),
        };
        if let Some(sup) = &self.extends {
            ty = ty.extends(sup);
        }
        for iface in &self.implements {
            ty = ty.implements(iface);
        }
        ty
    }
}

/// One condition in a rule's `when` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionDef {
    /// `{ when-type-is = "..." }`
    WhenTypeIs(String),
    /// `{ when-type-assignable = "..." }`
    WhenTypeAssignable(String),
    /// `{ when-property-is = { name = "...", value = "..." } }`
    WhenPropertyIs(ValueDef),
    /// `{ any = [...] }`
    Any(Vec<ConditionDef>),
    /// `{ all = [...] }`
    All(Vec<ConditionDef>),
    /// `{ none = [...] }`
    #[serde(rename = "none")]
    NoneOf(Vec<ConditionDef>),
}

impl ConditionDef {
    pub(crate) fn to_condition(&self) -> Condition {
        match self {
            Self::WhenTypeIs(name) => Condition::when_type_is(name),
            Self::WhenTypeAssignable(name) => Condition::when_type_assignable_to(name),
            Self::WhenPropertyIs(ValueDef { name, value }) => Condition::when_property_is(name, value),
            Self::Any(children) => Condition::any(children.iter().map(Self::to_condition)),
            Self::All(children) => Condition::all(children.iter().map(Self::to_condition)),
            Self::NoneOf(children) => Condition::none_of(children.iter().map(Self::to_condition)),
        }
    }
}

/// `[[rule]]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RuleDef {
    /// Substitute `class`.
    ReplaceWith {
        /// Replacement type.
        class: String,
        /// Root conditions.
        #[serde(default)]
        when: Vec<ConditionDef>,
    },
    /// Ask generator `class`.
    GenerateWith {
        /// Generator name.
        class: String,
        /// Root conditions.
        #[serde(default)]
        when: Vec<ConditionDef>,
    },
    /// Reject the request.
    Fail {
        /// Root conditions.
        #[serde(default)]
        when: Vec<ConditionDef>,
    },
}

impl RuleDef {
    /// The root conditions.
    pub fn when(&self) -> &[ConditionDef] {
        match self {
            Self::ReplaceWith { when, .. } | Self::GenerateWith { when, .. } | Self::Fail { when } => when,
        }
    }
}
