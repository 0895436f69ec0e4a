//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

impl Config {
    /// Create configuration from environment variables.
    ///
    /// `REBIND_LOG` wins over `RUST_LOG` for the filter, `REBIND_LOG_FORMAT`
    /// picks the format and `NO_COLOR` turns colors off. An unrecognised
    /// format name falls back to compact output.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = var("REBIND_LOG").or_else(|| var("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = var("REBIND_LOG_FORMAT") {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.display.colors = false;
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration (everything, no colors or timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_vars(vars(&[])), Config::default());
    }

    #[test]
    fn rebind_log_wins_over_rust_log() {
        let config = Config::from_vars(vars(&[("RUST_LOG", "warn"), ("REBIND_LOG", "rebind_rules=debug")]));
        assert_eq!(config.level, "rebind_rules=debug");

        let config = Config::from_vars(vars(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn format_and_color_come_from_env() {
        let config = Config::from_vars(vars(&[("REBIND_LOG_FORMAT", "json"), ("NO_COLOR", "1")]));
        assert_eq!(config.format, Format::Json);
        assert!(!config.display.colors);

        let config = Config::from_vars(vars(&[("REBIND_LOG_FORMAT", "bogus")]));
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn presets_differ_where_expected() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().display.colors);
        assert!(!Config::test().display.time);
    }
}
