//! # rebind-property
//!
//! Properties declared by a deferred-binding module.
//!
//! - [`BindingProperty`]: a selection axis such as `user.agent`, with defined
//!   values, an allowed subset and an optional fallback
//! - [`ConfigurationProperty`]: a named single- or multi-valued string setting
//! - [`Properties`]: the module's declaration-ordered property table
//! - [`PropertyOracle`]: read-only lookup consumed by rule evaluation, with
//!   [`StaticPropertyOracle`] as the in-memory implementation

mod binding;
mod configuration;
mod error;
mod oracle;
mod properties;

pub use binding::BindingProperty;
pub use configuration::ConfigurationProperty;
pub use error::{PropertyError, PropertyResult};
pub use oracle::{PropertyOracle, StaticPropertyOracle};
pub use properties::{Properties, Property};
