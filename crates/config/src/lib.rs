//! # rebind-config
//!
//! Module files for deferred binding, in TOML or JSON.
//!
//! A module file declares binding and configuration properties, adjusts them
//! through an ordered `[[configure]]` list (`op` is one of `set-property`,
//! `set-property-fallback`, `set-configuration-property`,
//! `extend-configuration-property`, `clear-configuration-property`, applied
//! in file order), lists the types its rules may refer to, and declares
//! rebind rules. [`Module::load`] turns such a file into the structures
//! `rebind-rules` evaluates.

mod error;
mod format;
pub mod model;
mod module;

pub use error::{ConfigError, ConfigResult};
pub use format::ConfigFormat;
pub use model::{Directive, ModuleConfig};
pub use module::Module;
