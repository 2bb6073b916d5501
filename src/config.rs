//! Layered form configuration: built-in defaults, TOML file, CLI overrides.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::export::OutputFormat;
use crate::form::{Model, Parameter, example_model, example_parameters};

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Parameter Editor";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Layer merging or extraction error (includes TOML parse errors)
    Extract(Box<figment::Error>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Extract(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Form metadata
    pub form: FormMetadata,
    /// Field definitions, in display order
    pub parameters: Vec<Parameter>,
    /// Initial values and passthrough data
    pub model: Model,
    /// Where and how saved models go
    pub output: OutputConfig,
}

/// Form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMetadata {
    /// Title shown above the form
    pub title: String,
}

impl Default for FormMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Save destination settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Serialization format for saved models
    pub format: OutputFormat,
    /// Output file (stdout, or the log in the TUI, when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Values set explicitly on the command line.
///
/// Unset fields are skipped on serialization so they never shadow lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    pub form: FormOverrides,
    pub output: OutputOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FormOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OutputOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl FormConfig {
    /// The built-in example form.
    pub fn example() -> Self {
        Self {
            form: FormMetadata::default(),
            parameters: example_parameters(),
            model: example_model(),
            output: OutputConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(&content))
            .extract()?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the effective configuration.
    ///
    /// Without a file the example form is the base layer; with one, the file
    /// defines the form on top of empty defaults. CLI overrides apply last.
    pub fn resolve(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let figment = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(&content))
            }
            None => Figment::from(Serialized::defaults(Self::example())),
        };

        let config = figment.merge(Serialized::defaults(overrides)).extract()?;
        Ok(config)
    }
}
