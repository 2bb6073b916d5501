//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigOverrides, FormOverrides, OutputOverrides};
use crate::export::OutputFormat;
use crate::form::ParamId;
use crate::logging::RunMode;

/// Parameter form editor with per-field validation.
#[derive(Parser, Debug)]
#[command(name = "paramform")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load the form definition (title, parameters, model, output) from a TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change a field as if typed: ID=VALUE (repeatable, applied in order)
    #[arg(long = "set", value_name = "ID=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(ParamId, String)>,

    /// Launch the interactive terminal editor
    #[arg(short, long)]
    pub interactive: bool,

    /// Output file for saved models (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format: json or yaml
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Form title
    #[arg(long)]
    pub title: Option<String>,

    /// Report validation state without saving
    #[arg(long)]
    pub dry_run: bool,

    /// Save the resolved configuration, including edits, to a TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Log file path (default: paramform.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info, or debug without -i)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        if self.interactive {
            RunMode::Interactive
        } else {
            RunMode::Headless
        }
    }

    /// Settings given on the command line, layered over the config file.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            form: FormOverrides {
                title: self.title.clone(),
            },
            output: OutputOverrides {
                format: self.format,
                path: self.output.clone(),
            },
        }
    }
}

/// Parse `ID=VALUE`. The value may be empty.
fn parse_assignment(s: &str) -> Result<(ParamId, String), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{s}'"))?;
    let id = id
        .parse::<ParamId>()
        .map_err(|e| format!("invalid parameter id '{id}': {e}"))?;
    Ok((id, value.to_string()))
}
