//! Logger setup errors.

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level directive could not be parsed into an `EnvFilter`.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The directive as given.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("a global logger is already installed")]
    AlreadyInitialized,

    /// Unknown output format name.
    #[error("unknown log format '{0}' (expected pretty, compact or json)")]
    UnknownFormat(String),
}

/// Result alias for logger operations.
pub type LogResult<T> = Result<T, LogError>;
