//! Logger builder implementation

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format, Writer};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Handle returned once the global subscriber is installed.
#[derive(Debug)]
#[must_use = "dropping the guard right away hides what was installed"]
pub struct LoggerGuard {
    level: String,
    format: Format,
}

impl LoggerGuard {
    /// The filter directive in effect.
    pub fn level(&self) -> &str {
        &self.level
    }

    /// The output format in effect.
    pub fn format(&self) -> Format {
        self.format
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parse the filter directive.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] when the directive is malformed.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the filter directive cannot be parsed
    /// - a global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;

        Registry::default()
            .with(fmt_layer(&self.config))
            .with(filter)
            .try_init()
            .map_err(|_| LogError::AlreadyInitialized)?;

        tracing::debug!(level = %self.config.level, format = %self.config.format, "logger installed");

        Ok(LoggerGuard {
            level: self.config.level,
            format: self.config.format,
        })
    }
}

fn fmt_layer(config: &Config) -> BoxedLayer {
    let writer = match config.writer {
        Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
        Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
    };
    let display = &config.display;
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(display.colors)
        .with_target(display.target);

    match (config.format, display.time) {
        (Format::Pretty, true) => layer.pretty().boxed(),
        (Format::Pretty, false) => layer.pretty().without_time().boxed(),
        (Format::Compact, true) => layer.compact().boxed(),
        (Format::Compact, false) => layer.compact().without_time().boxed(),
        (Format::Json, true) => layer.json().boxed(),
        (Format::Json, false) => layer.json().without_time().boxed(),
    }
}
