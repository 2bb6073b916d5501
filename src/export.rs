//! Model serialization for saving and previewing.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::form::Model;

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Error type for export operations.
#[derive(Debug)]
pub enum ExportError {
    /// IO error writing output
    Io(std::io::Error),
    /// JSON serialization error
    Json(serde_json::Error),
    /// YAML serialization error
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Json(e) => write!(f, "JSON serialize error: {}", e),
            Self::Yaml(e) => write!(f, "YAML serialize error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<serde_yaml::Error> for ExportError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

/// Serialize a model. The result always ends with a newline.
pub fn render(model: &Model, format: OutputFormat) -> Result<String, ExportError> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(model)?,
        OutputFormat::Yaml => serde_yaml::to_string(model)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
