//! kanacheck settings loaded from TOML.
//!
//! Default values are embedded via `include_str!("default_settings.toml")`
//! and validated by `build.rs`. A custom file passed with `--config` replaces
//! them wholesale.

use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output: OutputSettings,
    pub input: InputSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub show_accepted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub skip_blank_lines: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}

/// Load settings from `path`, or the embedded defaults when `None`.
pub fn load(path: Option<&Path>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
                path: path.display().to_string(),
                source,
            })?;
            parse_settings_toml(&content)
        }
        None => parse_settings_toml(DEFAULT_SETTINGS_TOML),
    }
}

/// [`load`], then apply command-line overrides. `json` forces
/// `output.format = "json"` regardless of the file.
pub fn load_with_overrides(path: Option<&Path>, json: bool) -> Result<Settings, SettingsError> {
    let mut s = load(path)?;
    if json {
        s.output.format = OutputFormat::Json;
    }
    Ok(s)
}
