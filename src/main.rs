//! CLI entry point for paramform.

use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr};

use paramform::cli::Cli;
use paramform::config::FormConfig;
use paramform::container::{Container, FileSink, ModelSink, WriterSink};
use paramform::editor::Editor;
use paramform::logging::init_logging;
use paramform::tui;
use paramform::validation::validate_with_warnings;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "paramform", &mut io::stdout());
        return Ok(());
    }

    let _guard = init_logging(
        cli.run_mode(),
        cli.log_file.as_deref(),
        cli.log_level.as_deref(),
    );

    let config = FormConfig::resolve(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    if cli.interactive {
        return tui::run(config);
    }

    let sink: Box<dyn ModelSink> = match config.output.path {
        Some(ref path) => Box::new(FileSink::new(path, config.output.format)),
        None => Box::new(WriterSink::new(io::stdout(), config.output.format)),
    };
    let editor = Editor::new(config.parameters.clone(), config.model.clone());
    let mut container = Container::new(editor, sink);

    for (id, value) in &cli.set {
        if !container.editor().has_param(*id) {
            eprintln!("Warning: no parameter with id {id}");
        }
        container.editor_mut().on_field_change(*id, value.as_str());
    }

    let warnings = validate_with_warnings(container.editor());
    for warning in &warnings {
        eprintln!("Warning: {warning}");
    }

    if cli.dry_run {
        let editor = container.editor();
        eprintln!(
            "{} fields, {} invalid",
            editor.params().len(),
            editor.invalid_count()
        );
        return Ok(());
    }

    let model = container.on_save().wrap_err("Failed to save model")?;
    if let Some(ref path) = config.output.path {
        eprintln!("Wrote model to {}", path.display());
    }

    if let Some(ref path) = cli.save_config {
        let saved = FormConfig { model, ..config };
        saved
            .save(path)
            .wrap_err_with(|| format!("Failed to write config to {}", path.display()))?;
        eprintln!("Wrote config to {}", path.display());
    }

    Ok(())
}
