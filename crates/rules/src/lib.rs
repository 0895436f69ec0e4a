//! # rebind-rules
//!
//! Deferred-binding evaluation: given the name of a requested type, pick the
//! type to instantiate instead.
//!
//! ## Core Types
//!
//! - [`Condition`]: predicate over the requested type and property values
//! - [`Conditions`]: ordered, append-only list of conditions
//! - [`Rule`]: root ALL-condition plus a [`RuleAction`]
//!   (`replace-with`, `generate-with`, `fail`)
//! - [`Rules`]: priority-ordered collection with first-match [`Rules::rebind`]
//! - [`RebindOracle`]: per-pass answer cache
//!
//! ## Collaborators
//!
//! Evaluation reads three oracles bundled in a [`RebindContext`]:
//! a [`PropertyOracle`](rebind_property::PropertyOracle), a [`TypeOracle`]
//! and a [`GeneratorResolver`]. [`TypeRegistry`] and [`GeneratorRegistry`]
//! are the in-memory implementations.
//!
//! ## Errors
//!
//! [`RebindError`] aborts resolution for the requested type. A rule that
//! refers to a type which no longer exists is not an error: the condition
//! evaluates to `false` and a warning is logged.
//!
//! ```
//! use rebind_property::{Properties, StaticPropertyOracle};
//! use rebind_rules::{Condition, DeclaredType, GeneratorRegistry, RebindContext, Rule, Rules, TypeRegistry};
//!
//! let mut rules = Rules::new();
//! rules.prepend(Rule::replace_with("com.foo.Impl").when(Condition::when_type_is("com.foo.Base")));
//!
//! let props = Properties::new();
//! let oracle = StaticPropertyOracle::new(&props);
//! let mut types = TypeRegistry::new();
//! types.insert(DeclaredType::class("com.foo.Base"));
//! let generators = GeneratorRegistry::new();
//!
//! let ctx = RebindContext::new(&oracle, &types, &generators);
//! assert_eq!(rules.rebind(&ctx, "com.foo.Base").unwrap().type_name, "com.foo.Impl");
//! ```

mod condition;
mod conditions;
mod context;
mod error;
mod generator;
mod oracle;
mod rule;
mod rules;
mod types;

pub use condition::Condition;
pub use conditions::Conditions;
pub use context::RebindContext;
pub use error::{RebindError, RebindResult};
pub use generator::{Generator, GeneratorError, GeneratorRegistry, GeneratorResolver, RegistryError};
pub use oracle::RebindOracle;
pub use rule::{Rule, RuleAction};
pub use rules::{Rebind, Rules};
pub use types::{DeclaredType, OBJECT, TypeKind, TypeOracle, TypeRegistry};
