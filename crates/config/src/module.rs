//! A loaded module: properties, declared types and rules.

use std::path::Path;

use rebind_property::{Properties, PropertyError, PropertyOracle, StaticPropertyOracle};
use rebind_rules::{
    Condition, GeneratorResolver, RebindContext, RebindResult, Rebind, Rule, Rules, TypeRegistry,
};

use crate::error::{ConfigError, ConfigResult};
use crate::format::ConfigFormat;
use crate::model::{Directive, ModuleConfig, PropertyDef, RuleDef};

/// Everything a module file declares, ready for evaluation.
///
/// Rules are installed in file order with [`Rules::prepend`], so a rule
/// written later in the file takes precedence over earlier ones.
#[derive(Debug)]
pub struct Module {
    name: String,
    properties: Properties,
    types: TypeRegistry,
    rules: Rules,
}

impl Module {
    /// Read and build a module from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path);
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), %format, "loading module file");
        Self::parse(&text, &format)
    }

    /// Build a module from text in the given format.
    pub fn parse(text: &str, format: &ConfigFormat) -> ConfigResult<Self> {
        let config: ModuleConfig = format.parse(text)?;
        Self::from_config(config)
    }

    /// Build a module from an already-parsed configuration.
    pub fn from_config(config: ModuleConfig) -> ConfigResult<Self> {
        if config.name.trim().is_empty() {
            return Err(ConfigError::Invalid("module name must not be empty".into()));
        }

        let mut properties = Properties::new();

        for def in &config.properties {
            match def {
                PropertyDef::Binding {
                    name,
                    values,
                    fallback,
                } => {
                    let prop = properties.create_binding(name)?;
                    for value in values {
                        prop.define_value(value)?;
                    }
                    if let Some(fallback) = fallback {
                        prop.set_fallback(fallback)?;
                    }
                }
                PropertyDef::Configuration {
                    name,
                    multi_valued,
                    values,
                } => {
                    let prop = properties.create_configuration(name, *multi_valued)?;
                    if prop.allows_multiple_values() {
                        for value in values {
                            prop.add_value(value)?;
                        }
                    } else if !values.is_empty() {
                        prop.set_values(values)?;
                    }
                }
            }
        }

        for directive in &config.directives {
            apply_directive(&mut properties, directive)?;
        }

        let mut types = TypeRegistry::new();
        for def in &config.types {
            types.insert(def.to_declared());
        }

        let mut rules = Rules::new();
        for (index, def) in config.rules.iter().enumerate() {
            let mut rule = match def {
                RuleDef::ReplaceWith { class, .. } => Rule::replace_with(class),
                RuleDef::GenerateWith { class, .. } => Rule::generate_with(class),
                RuleDef::Fail { .. } => Rule::fail(),
            };
            for cond in def.when() {
                let condition = cond.to_condition();
                check_property_references(&properties, index, &condition)?;
                rule.add_condition(condition);
            }
            rules.prepend(rule);
        }

        tracing::info!(
            module = %config.name,
            properties = properties.len(),
            types = types.len(),
            rules = rules.len(),
            "module loaded"
        );

        Ok(Self {
            name: config.name,
            properties,
            types,
            rules,
        })
    }

    /// Module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared properties.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Declared types.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// A property oracle with no selections; add them with
    /// [`StaticPropertyOracle::select`].
    pub fn property_oracle(&self) -> StaticPropertyOracle<'_> {
        StaticPropertyOracle::new(&self.properties)
    }

    /// Resolve `type_name` against this module's types and rules, reading
    /// property values from any oracle.
    pub fn rebind(
        &self,
        properties: &dyn PropertyOracle,
        generators: &dyn GeneratorResolver,
        type_name: &str,
    ) -> RebindResult<Rebind> {
        let ctx = RebindContext::new(properties, &self.types, generators);
        self.rules.rebind(&ctx, type_name)
    }

    /// Tear the module down, releasing rule-held generator state.
    pub fn unload(mut self) {
        tracing::debug!(module = %self.name, "unloading module");
        self.rules.dispose();
    }
}

fn apply_directive(properties: &mut Properties, directive: &Directive) -> ConfigResult<()> {
    match directive {
        Directive::SetProperty { name, values } => {
            properties.binding_mut(name)?.set_allowed_values(values)?;
        }
        Directive::SetPropertyFallback { name, value } => {
            properties.binding_mut(name)?.set_fallback(value)?;
        }
        Directive::SetConfigurationProperty { name, value } => {
            properties.configuration_mut(name)?.set_value(value);
        }
        Directive::ExtendConfigurationProperty { name, value } => {
            properties.configuration_mut(name)?.add_value(value)?;
        }
        Directive::ClearConfigurationProperty { name } => {
            properties.configuration_mut(name)?.clear();
        }
    }
    Ok(())
}

/// Every `when-property-is` must name a declared binding property and one of
/// its defined values.
fn check_property_references(
    properties: &Properties,
    rule: usize,
    condition: &Condition,
) -> ConfigResult<()> {
    match condition {
        Condition::WhenPropertyIs { property, value } => {
            let Some(binding) = properties.binding(property) else {
                return Err(ConfigError::UnknownProperty {
                    rule,
                    property: property.clone(),
                });
            };
            if binding.defined_values().any(|v| v == value.as_str()) {
                Ok(())
            } else {
                Err(PropertyError::UndefinedValue {
                    name: property.clone(),
                    value: value.clone(),
                }
                .into())
            }
        }
        Condition::All(children) | Condition::Any(children) | Condition::NoneOf(children) => {
            for child in children {
                check_property_references(properties, rule, child)?;
            }
            Ok(())
        }
        Condition::WhenTypeIs(_) | Condition::WhenTypeAssignableTo(_) => Ok(()),
    }
}
