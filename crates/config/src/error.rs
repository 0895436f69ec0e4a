//! Module configuration errors.

use std::path::PathBuf;

use rebind_property::PropertyError;

/// Errors while reading or applying a module configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read module file {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid in its format.
    #[error("failed to parse {format} module configuration: {message}")]
    Parse {
        /// Format name.
        format: String,
        /// Parser message.
        message: String,
    },

    /// The file extension does not map to a supported format.
    #[error("unsupported module configuration format: {0}")]
    UnsupportedFormat(String),

    /// A property declaration or update was rejected.
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// A rule condition references an undeclared binding property.
    #[error("rule {rule} references unknown binding property '{property}'")]
    UnknownProperty {
        /// Position of the rule in the file.
        rule: usize,
        /// The property name.
        property: String,
    },

    /// The document is well-formed but semantically invalid.
    #[error("invalid module configuration: {0}")]
    Invalid(String),
}

/// Standard result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_property_display() {
        let err = ConfigError::UnknownProperty {
            rule: 2,
            property: "locale".into(),
        };
        assert_eq!(
            err.to_string(),
            "rule 2 references unknown binding property 'locale'"
        );
    }

    #[test]
    fn property_error_is_transparent() {
        let err: ConfigError = PropertyError::NotMultiValued("x".into()).into();
        assert_eq!(
            err.to_string(),
            "configuration property 'x' does not allow multiple values"
        );
    }
}
