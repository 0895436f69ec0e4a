//! A single deferred-binding rule: root condition plus replacement action.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::Mutex;

use crate::condition::Condition;
use crate::conditions::Conditions;
use crate::context::RebindContext;
use crate::error::{RebindError, RebindResult};
use crate::generator::Generator;

/// What a rule does once its root condition holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// Substitute a fixed type name.
    ReplaceWith(String),
    /// Ask the named generator for a type name.
    GenerateWith(String),
    /// Reject the binding request.
    Fail,
}

/// Root ALL-condition paired with a [`RuleAction`].
///
/// ```
/// use rebind_rules::{Condition, Rule};
///
/// let rule = Rule::replace_with("com.foo.Impl").when(Condition::when_type_is("com.foo.Base"));
/// assert_eq!(rule.root_condition().len(), 1);
/// ```
pub struct Rule {
    root: Conditions,
    action: RuleAction,
    /// Generator instance used by the latest `realize`, kept until disposal.
    generator: Mutex<Option<Arc<dyn Generator>>>,
}

impl Rule {
    /// A rule with an empty root condition and the given action.
    pub fn new(action: RuleAction) -> Self {
        Self {
            root: Conditions::new(),
            action,
            generator: Mutex::new(None),
        }
    }

    /// `<replace-with class=type_name>`
    pub fn replace_with(type_name: impl Into<String>) -> Self {
        Self::new(RuleAction::ReplaceWith(type_name.into()))
    }

    /// `<generate-with class=generator>`
    pub fn generate_with(generator: impl Into<String>) -> Self {
        Self::new(RuleAction::GenerateWith(generator.into()))
    }

    /// `<fail>`
    pub fn fail() -> Self {
        Self::new(RuleAction::Fail)
    }

    /// Add a condition to the root, builder style.
    pub fn when(mut self, condition: Condition) -> Self {
        self.root.add(condition);
        self
    }

    /// Add a condition to the root.
    pub fn add_condition(&mut self, condition: Condition) {
        self.root.add(condition);
    }

    /// The root conditions, all of which must hold.
    pub fn root_condition(&self) -> &Conditions {
        &self.root
    }

    /// The action taken when the rule applies.
    pub fn action(&self) -> &RuleAction {
        &self.action
    }

    /// Properties the root condition reads.
    pub fn required_properties(&self) -> IndexSet<String> {
        self.root.required_properties()
    }

    /// Whether every root condition holds for `type_name`.
    pub fn is_applicable(&self, ctx: &RebindContext<'_>, type_name: &str) -> RebindResult<bool> {
        let span = tracing::debug_span!("rule", rule = %self);
        let _guard = span.enter();

        for condition in &self.root {
            if !condition.is_true(ctx, type_name)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Compute the replacement type. Only meaningful after
    /// [`is_applicable`](Self::is_applicable) returned `true`.
    ///
    /// Generators are resolved through `ctx` on every call.
    pub fn realize(&self, ctx: &RebindContext<'_>, type_name: &str) -> RebindResult<String> {
        match &self.action {
            RuleAction::ReplaceWith(replacement) => Ok(replacement.clone()),

            RuleAction::GenerateWith(name) => {
                let Some(generator) = ctx.generators().resolve(name) else {
                    tracing::error!(generator = %name, "unable to find generator");
                    return Err(RebindError::GeneratorNotFound(name.clone()));
                };

                let previous = self.generator.lock().replace(Arc::clone(&generator));
                if let Some(previous) = previous {
                    previous.release();
                }

                generator
                    .generate(ctx, type_name)
                    .map_err(|e| RebindError::GeneratorFailed {
                        generator: name.clone(),
                        type_name: type_name.to_owned(),
                        reason: e.to_string(),
                    })
            }

            RuleAction::Fail => {
                tracing::error!(type_name, "deferred binding failed");
                Err(RebindError::ExplicitFailure(type_name.to_owned()))
            }
        }
    }

    /// Release held generator state. A no-op for rules that hold none.
    pub fn dispose(&mut self) {
        if let Some(generator) = self.generator.get_mut().take() {
            generator.release();
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match &self.action {
            RuleAction::ReplaceWith(name) => (format!("<replace-with class='{name}'>"), "</replace-with>"),
            RuleAction::GenerateWith(name) => (format!("<generate-with class='{name}'>"), "</generate-with>"),
            RuleAction::Fail => ("<fail>".to_owned(), "</fail>"),
        };
        f.write_str(&open)?;
        for condition in &self.root {
            write!(f, "{condition}")?;
        }
        f.write_str(close)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("root", &self.root)
            .field("action", &self.action)
            .field("holds_generator", &self.generator.lock().is_some())
            .finish()
    }
}
