//! Module file formats.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ConfigError, ConfigResult};

/// Serialization format of a module file.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// JSON format
    Json,

    /// TOML format
    Toml,

    /// Unknown format
    Unknown(String),
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => ConfigFormat::Json,
            "toml" => ConfigFormat::Toml,
            _ => ConfigFormat::Unknown(ext.to_string()),
        }
    }

    /// Detect format from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(ConfigFormat::Unknown("no_extension".to_string()))
    }

    /// Parse `text` in this format.
    pub(crate) fn parse<T: DeserializeOwned>(&self, text: &str) -> ConfigResult<T> {
        match self {
            ConfigFormat::Json => serde_json::from_str(text).map_err(|e| ConfigError::Parse {
                format: self.to_string(),
                message: e.to_string(),
            }),
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(text).map_err(|e| ConfigError::Parse {
                format: self.to_string(),
                message: e.to_string(),
            }),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Json => write!(f, "JSON"),
            ConfigFormat::Toml => write!(f, "TOML"),
            ConfigFormat::Unknown(s) => write!(f, "Unknown ({s})"),
        }
    }
}
