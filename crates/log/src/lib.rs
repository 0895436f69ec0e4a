//! # rebind-log
//!
//! `tracing-subscriber` setup shared by the rebind tools. Library crates only
//! emit events through `tracing` macros; binaries call one of the init
//! functions here once at startup.
//!
//! ```no_run
//! let _guard = rebind_log::init_with(rebind_log::Config::from_env())?;
//! tracing::info!("ready");
//! # Ok::<(), rebind_log::LogError>(())
//! ```

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Writer};
pub use error::{LogError, LogResult};

/// Initialize with default configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`].
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
