//! Application model for the TUI.

use tuirealm::Update;

use crate::config::FormConfig;
use crate::container::{Container, ModelSink};
use crate::editor::Editor;
use crate::export::{ExportError, OutputFormat, render};

use super::activities::Msg;

/// Application model containing all state.
pub struct AppModel {
    pub title: String,
    pub container: Container,
    pub format: OutputFormat,

    // UI state
    pub quit: bool,
    pub show_help: bool,
    pub message: Option<String>,
}

impl AppModel {
    /// Build the model from a resolved configuration, saving to `sink`.
    pub fn new(config: FormConfig, sink: Box<dyn ModelSink>) -> Self {
        let editor = Editor::new(config.parameters, config.model);
        Self {
            title: config.form.title,
            container: Container::new(editor, sink),
            format: config.output.format,
            quit: false,
            show_help: false,
            message: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        self.container.editor()
    }

    /// Current model serialized in the configured format.
    pub fn rendered_model(&self) -> Result<String, ExportError> {
        render(&self.editor().get_model(), self.format)
    }

    fn save(&mut self) {
        self.message = Some(match self.container.on_save() {
            Ok(model) => {
                let invalid = self.editor().invalid_count();
                if invalid > 0 {
                    format!(
                        "Saved {} values ({} invalid)",
                        model.param_values.len(),
                        invalid
                    )
                } else {
                    format!("Saved {} values", model.param_values.len())
                }
            }
            Err(e) => {
                tracing::error!("Save failed: {}", e);
                format!("Save failed: {}", e)
            }
        });
    }
}

impl Update<Msg> for AppModel {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            Msg::Quit => {
                self.quit = true;
                None
            }
            Msg::ShowHelp => {
                self.show_help = true;
                None
            }
            Msg::FieldChanged(id, text) => {
                self.container.editor_mut().on_field_change(id, text);
                self.message = None;
                None
            }
            Msg::Save => {
                self.save();
                None
            }

            // Handled at activity level
            Msg::FocusNext | Msg::FocusPrev | Msg::SwitchToPreview => None,
        }
    }
}
