//! The fatal abort signal of rule evaluation.
//!
//! Evaluation has two outcomes besides success: an `Ok(false)` that was logged
//! as a warning (a rule referenced a type that no longer exists), and a
//! [`RebindError`] that unwinds the whole resolution attempt for the type.
//! Only the second one is represented here.

use rebind_property::PropertyError;

/// Deferred-binding resolution failed for the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RebindError {
    /// The type being rebound is unknown to the type oracle.
    #[error("unable to find requested type '{0}'")]
    UnresolvedType(String),

    /// A `generate-with` rule names a generator the resolver cannot provide.
    #[error("generator '{0}' could not be found")]
    GeneratorNotFound(String),

    /// A generator was found but failed to produce a type.
    #[error("generator '{generator}' failed for type '{type_name}': {reason}")]
    GeneratorFailed {
        /// The generator name.
        generator: String,
        /// The type being rebound.
        type_name: String,
        /// What the generator reported.
        reason: String,
    },

    /// A `fail` rule matched.
    #[error("deferred binding failed for '{0}'; expect subsequent failures")]
    ExplicitFailure(String),

    /// A rule depends on a property the oracle does not provide.
    #[error("rule for '{type_name}' requires property '{property}', which is not available")]
    MissingProperty {
        /// The type being rebound.
        type_name: String,
        /// The missing property.
        property: String,
    },

    /// A property lookup failed during evaluation.
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// Result alias for rule evaluation.
pub type RebindResult<T> = Result<T, RebindError>;
