//! Property error types.

/// Errors from property declaration and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// A value was added to a property declared single-valued.
    #[error("configuration property '{0}' does not allow multiple values")]
    NotMultiValued(String),

    /// `value()` was called while the property holds zero or several values.
    #[error("configuration property '{name}' has {count} values, expected exactly one")]
    NotSingleValued {
        /// The property name.
        name: String,
        /// How many values are currently stored.
        count: usize,
    },

    /// Several values were supplied to a single-valued property.
    #[error("configuration property '{name}' is single-valued but {count} values were supplied")]
    TooManyValues {
        /// The property name.
        name: String,
        /// How many values were supplied.
        count: usize,
    },

    /// No property with this name is declared.
    #[error("unknown property '{0}'")]
    Unknown(String),

    /// A property already exists under this name with a different kind.
    #[error("property '{name}' is already declared as a {existing} property")]
    KindMismatch {
        /// The property name.
        name: String,
        /// Kind of the existing declaration.
        existing: &'static str,
    },

    /// A value was referenced that was never defined for a binding property.
    #[error("value '{value}' is not defined for binding property '{name}'")]
    UndefinedValue {
        /// The property name.
        name: String,
        /// The offending value.
        value: String,
    },

    /// A selection was made that the property no longer allows.
    #[error("value '{value}' is not allowed for binding property '{name}'")]
    ValueNotAllowed {
        /// The property name.
        name: String,
        /// The offending value.
        value: String,
    },

    /// A binding property has neither a selection, a single allowed value, nor a fallback.
    #[error("binding property '{0}' has no value for this permutation")]
    NoValue(String),

    /// A property name or value is not a valid identifier.
    #[error("invalid identifier '{0}'")]
    InvalidName(String),
}

/// Result alias for property operations.
pub type PropertyResult<T> = Result<T, PropertyError>;
