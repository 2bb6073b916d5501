//! Container owning the editor and forwarding saved models to a sink.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
#[cfg(debug_assertions)]
use tracing::instrument;

use crate::editor::Editor;
use crate::export::{ExportError, OutputFormat, render};
use crate::form::Model;

/// Destination of saved models.
pub trait ModelSink {
    fn accept(&mut self, model: &Model) -> Result<(), ExportError>;
}

/// Emits each saved model as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink {
    format: OutputFormat,
}

impl LogSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ModelSink for LogSink {
    fn accept(&mut self, model: &Model) -> Result<(), ExportError> {
        let rendered = render(model, self.format)?;
        info!(model = %rendered.trim_end(), "updated model");
        Ok(())
    }
}

/// Writes each saved model to a writer, one after another.
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ModelSink for WriterSink<W> {
    fn accept(&mut self, model: &Model) -> Result<(), ExportError> {
        let rendered = render(model, self.format)?;
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Rewrites a file with the latest saved model.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelSink for FileSink {
    fn accept(&mut self, model: &Model) -> Result<(), ExportError> {
        let rendered = render(model, self.format)?;
        std::fs::write(&self.path, rendered)?;
        info!(path = %self.path.display(), "model written");
        Ok(())
    }
}

/// Hands each saved model to a closure.
pub struct CallbackSink<F>(pub F);

impl<F: FnMut(&Model)> ModelSink for CallbackSink<F> {
    fn accept(&mut self, model: &Model) -> Result<(), ExportError> {
        (self.0)(model);
        Ok(())
    }
}

/// Owns the editor and triggers saves.
pub struct Container {
    editor: Editor,
    sink: Box<dyn ModelSink>,
    saves: usize,
}

impl Container {
    pub fn new(editor: Editor, sink: Box<dyn ModelSink>) -> Self {
        Self {
            editor,
            sink,
            saves: 0,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Read the editor's current model and forward it to the sink.
    ///
    /// Invalid fields do not block the save.
    #[cfg_attr(debug_assertions, instrument(skip(self)))]
    pub fn on_save(&mut self) -> Result<Model, ExportError> {
        let model = self.editor.get_model();

        let invalid = self.editor.invalid_count();
        if invalid > 0 {
            warn!(invalid, "saving model with invalid fields");
        }

        self.sink.accept(&model)?;
        self.saves += 1;
        info!(
            values = model.param_values.len(),
            saves = self.saves,
            "model saved"
        );

        Ok(model)
    }
}
