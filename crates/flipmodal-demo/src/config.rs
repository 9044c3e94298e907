//! Demo configuration files.
//!
//! A config file holds the modal options under `[modal]` plus the text shown
//! in the card. The format is picked from the extension: `.toml` or `.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flipmodal_widgets::modal::ModalOptions;
use serde::Deserialize;
use thiserror::Error;

/// Errors from loading a demo config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported config format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Format for `path`, by extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Everything the demo reads from a config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub title: String,
    pub body: String,
    pub modal: ModalOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "flipmodal".to_string(),
            body: "Click outside to dismiss".to_string(),
            modal: ModalOptions::default(),
        }
    }
}

impl DemoConfig {
    /// Load from `path`, choosing the parser by extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, format, path)?;
        tracing::debug!(path = %path.display(), ?format, "loaded demo config");
        Ok(config)
    }

    /// Parse `text` in `format`; `path` is only used for error messages.
    pub fn parse(text: &str, format: ConfigFormat, path: &Path) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => toml::from_str(text).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            }),
            ConfigFormat::Json => serde_json::from_str(text).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
