//! Form activity - the parameter editing screen.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Application, EventListenerCfg, MockComponent, PollStrategy, Update, props::AttrValue,
};

use crate::form::ParamId;
use crate::tui::AppModel;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    Colors, FIELD_ERROR, FIELD_HEIGHT, FORM_FOOTER_ACTIONS, TextField, field_error_attr,
    format_footer, render_help,
};

// ============================================================================
// Component identifiers (scoped to FormActivity)
// ============================================================================

/// Unique identifiers for all components in FormActivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    /// Text field for the parameter at this position
    Field(usize),
    Colors,
}

// ============================================================================
// Messages (scoped to FormActivity)
// ============================================================================

/// All possible messages that can be sent in FormActivity.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // Field text changed (sent on every keystroke)
    FieldChanged(ParamId, String),

    Save,

    // Activity transition
    SwitchToPreview,
}

// ============================================================================
// User events (required by tui-realm, currently unused)
// ============================================================================

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// Focus management (scoped to FormActivity)
// ============================================================================

/// Manages Tab focus across the form's fields.
pub struct FocusManager {
    current_idx: usize,
    len: usize,
}

impl FocusManager {
    pub fn new(len: usize) -> Self {
        Self {
            current_idx: 0,
            len,
        }
    }

    /// Current focus, or None for a form without fields.
    pub fn current_focus(&self) -> Option<Id> {
        (self.len > 0).then_some(Id::Field(self.current_idx))
    }

    pub fn focus_next(&mut self) -> Option<Id> {
        if self.len > 0 {
            self.current_idx = (self.current_idx + 1) % self.len;
        }
        self.current_focus()
    }

    pub fn focus_prev(&mut self) -> Option<Id> {
        if self.len > 0 {
            self.current_idx = (self.current_idx + self.len - 1) % self.len;
        }
        self.current_focus()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Error attribute for every field component, from the editor's current state.
fn field_error_attrs(model: &AppModel) -> Vec<(Id, AttrValue)> {
    let editor = model.editor();
    editor
        .params()
        .iter()
        .enumerate()
        .map(|(slot, param)| (Id::Field(slot), field_error_attr(editor.error(param.id))))
        .collect()
}

// ============================================================================
// FormActivity
// ============================================================================

/// The form editing activity.
#[derive(Default)]
pub struct FormActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusManager,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl FormActivity {
    /// Create and configure the tui-realm application.
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Mount one text field per parameter plus the colors panel.
    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &AppModel) -> Result<()> {
        let editor = model.editor();

        for (slot, param) in editor.params().iter().enumerate() {
            let mut field = TextField::new(param, editor.value(param.id));
            field.attr(FIELD_ERROR, field_error_attr(editor.error(param.id)));
            app.mount(Id::Field(slot), Box::new(field), vec![])?;
        }

        let colors = Colors::new(editor.get_model().colors);
        app.mount(Id::Colors, Box::new(colors), vec![])?;

        if !editor.params().is_empty() {
            app.active(&Id::Field(0))?;
        }

        Ok(())
    }

    /// Push each field's validation state to its component.
    fn sync_field_errors(app: &mut Application<Id, Msg, UserEvent>, model: &AppModel) {
        for (id, value) in field_error_attrs(model) {
            let _ = app.attr(&id, FIELD_ERROR, value);
        }
    }
}

impl Activity for FormActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();

        let editor = context.model.editor();
        self.focus = FocusManager::new(editor.params().len());
        if let Err(e) = Self::mount_components(&mut app, &context.model) {
            tracing::error!("Failed to mount components: {}", e);
        }

        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self
            .app
            .as_mut()
            .ok_or_else(|| eyre!("form activity not created"))?;
        let model = &mut self
            .context
            .as_mut()
            .ok_or_else(|| eyre!("form activity has no context"))?
            .model;

        let field_count = model.editor().params().len();

        terminal.draw(|frame| {
            let area = frame.area();

            let main_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(5),    // Content
                    Constraint::Length(1), // Status
                ])
                .split(area);

            let editor = model.editor();
            let title = if editor.is_valid() {
                format!(" {} ", model.title)
            } else {
                format!(" {} - {} invalid ", model.title, editor.invalid_count())
            };
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, main_rows[0]);

            // Content: parameters on the left, colors on the right
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                .split(main_rows[1]);

            let params_block = Block::default().title(" Parameters ").borders(Borders::ALL);
            let params_inner = params_block.inner(cols[0]);
            frame.render_widget(params_block, cols[0]);

            let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); field_count];
            constraints.push(Constraint::Min(0));
            let field_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(params_inner);

            for slot in 0..field_count {
                app.view(&Id::Field(slot), frame, field_rows[slot]);
            }

            app.view(&Id::Colors, frame, cols[1]);

            let status = model
                .message
                .clone()
                .unwrap_or_else(|| format_footer(FORM_FOOTER_ACTIONS, &[("edit", "Enter")]));
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, main_rows[2]);

            if model.show_help {
                render_help(frame);
            }
        })?;

        // Help modal intercepts all input while visible
        if model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        model.show_help = false;
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                let mut fields_changed = false;

                for msg in messages {
                    match &msg {
                        Msg::FocusNext => {
                            if let Some(next) = self.focus.focus_next() {
                                let _ = app.active(&next);
                            }
                        }
                        Msg::FocusPrev => {
                            if let Some(prev) = self.focus.focus_prev() {
                                let _ = app.active(&prev);
                            }
                        }
                        Msg::SwitchToPreview => {
                            self.exit_reason = Some(ExitReason::SwitchToPreview);
                            return Ok(());
                        }
                        Msg::FieldChanged(..) => fields_changed = true,
                        _ => {}
                    }

                    let mut current = Some(msg);
                    while let Some(m) = current {
                        current = model.update(Some(m));
                    }

                    if model.quit {
                        self.exit_reason = Some(ExitReason::Quit);
                        return Ok(());
                    }
                }

                if fields_changed {
                    Self::sync_field_errors(app, model);
                }
            }
            Err(_) => {
                // Timeout is fine, just continue
            }
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}
