//! Labeled single-line text input with an inline validation message.

use crossterm_actions::{InputEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection, Position},
    event::{Key, KeyModifiers},
    props::{AttrValue, Attribute, Props},
};

use crate::form::{ParamId, Parameter};
use crate::tui::activities::{Msg, form::UserEvent};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};
use crate::validation::FieldError;

/// Rows taken by one field: label, bordered input, error line.
pub const FIELD_HEIGHT: u16 = 5;

/// Attribute carrying the field's current validation error.
pub const FIELD_ERROR: Attribute = Attribute::Custom("field-error");

/// Attribute value for [`FIELD_ERROR`].
pub fn field_error_attr(error: Option<&FieldError>) -> AttrValue {
    match error {
        Some(e) => AttrValue::String(e.message().to_string()),
        None => AttrValue::Flag(false),
    }
}

/// Text input bound to one parameter.
pub struct TextField {
    props: Props,
    param_id: ParamId,
    label: String,
    text: String,
    /// Cursor position in chars
    cursor: usize,
    editing: bool,
}

impl TextField {
    pub fn new(param: &Parameter, text: &str) -> Self {
        Self {
            props: Props::default(),
            param_id: param.id,
            label: param.name.clone(),
            text: text.to_string(),
            cursor: text.chars().count(),
            editing: false,
        }
    }

    fn error(&self) -> Option<String> {
        match self.props.get(FIELD_ERROR) {
            Some(AttrValue::String(message)) => Some(message),
            _ => None,
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn start_editing(&mut self) {
        self.editing = true;
        self.cursor = self.char_count();
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn delete_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    fn delete_at(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    fn changed(&self) -> Option<Msg> {
        Some(Msg::FieldChanged(self.param_id, self.text.clone()))
    }

    fn input_line(&self, focused: bool) -> Line<'_> {
        if !self.editing {
            let style = if focused {
                Style::default().fg(Color::White)
            } else {
                Style::default()
            };
            return Line::from(Span::styled(self.text.as_str(), style));
        }

        let split = self.byte_offset(self.cursor);
        let (before, rest) = self.text.split_at(split);
        let mut chars = rest.chars();
        let under = chars.next().map(String::from).unwrap_or_else(|| " ".into());
        let after = chars.as_str();

        Line::from(vec![
            Span::raw(before),
            Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ])
    }

    /// Raw key handling while editing. Every change is reported immediately.
    fn on_edit_key(&mut self, key: Key) -> Option<Msg> {
        match key {
            Key::Char(c) => {
                self.insert_char(c);
                self.changed()
            }
            Key::Backspace => {
                if self.delete_before() {
                    self.changed()
                } else {
                    None
                }
            }
            Key::Delete => {
                if self.delete_at() {
                    self.changed()
                } else {
                    None
                }
            }
            Key::Left => {
                self.perform(Cmd::Move(CmdDirection::Left));
                None
            }
            Key::Right => {
                self.perform(Cmd::Move(CmdDirection::Right));
                None
            }
            Key::Home => {
                self.perform(Cmd::GoTo(Position::Begin));
                None
            }
            Key::End => {
                self.perform(Cmd::GoTo(Position::End));
                None
            }
            Key::Enter | Key::Esc => {
                self.editing = false;
                None
            }
            Key::Tab => {
                self.editing = false;
                Some(Msg::FocusNext)
            }
            Key::BackTab => {
                self.editing = false;
                Some(Msg::FocusPrev)
            }
            _ => None,
        }
    }
}

impl MockComponent for TextField {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();
        let error = self.error();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(3), // Input
                Constraint::Length(1), // Error
            ])
            .split(area);

        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(format!("{}:", self.label)).style(label_style),
            rows[0],
        );

        let border_style = if error.is_some() {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let input = Paragraph::new(self.input_line(focused)).block(block);
        frame.render_widget(input, rows[1]);

        if let Some(message) = error {
            let message = Paragraph::new(message).style(Style::default().fg(Color::Red));
            frame.render_widget(message, rows[2]);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::String(self.text.clone()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Right) => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                CmdResult::None
            }
            Cmd::GoTo(Position::Begin) => {
                self.cursor = 0;
                CmdResult::None
            }
            Cmd::GoTo(Position::End) => {
                self.cursor = self.char_count();
                CmdResult::None
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for TextField {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        if self.editing {
            return self.on_edit_key(key_event.code);
        }

        if let Some(action) = dispatcher().dispatch(&key_event) {
            if let Some(msg) = handle_global_app_events(&action) {
                return Some(msg);
            }

            match action {
                AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => {
                    self.start_editing();
                    return None;
                }
                AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => {
                    return Some(Msg::FocusNext);
                }
                AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => {
                    return Some(Msg::FocusPrev);
                }
                _ => {}
            }
        }

        // Printable keys the form has no use for start editing
        if let Key::Char(c) = key_event.code
            && !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            self.start_editing();
            self.insert_char(c);
            return self.changed();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use tuirealm::event::KeyEvent;

    use crate::validation::EMPTY_FIELD_MESSAGE as EMPTY_MESSAGE;

    fn field(text: &str) -> TextField {
        let mut field = TextField::new(&Parameter::new(1, "Purpose"), text);
        field.attr(Attribute::Focus, AttrValue::Flag(true));
        field
    }

    fn press(field: &mut TextField, key: Key) -> Option<Msg> {
        field.on(Event::Keyboard(KeyEvent::new(key, KeyModifiers::NONE)))
    }

    fn render(field: &mut TextField) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(30, FIELD_HEIGHT)).unwrap();
        terminal.draw(|frame| field.view(frame, frame.area())).unwrap();
        terminal
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn editing_reports_every_keystroke() {
        let mut field = field("maxi");
        field.start_editing();

        assert_eq!(
            press(&mut field, Key::Backspace),
            Some(Msg::FieldChanged(ParamId(1), "max".into()))
        );
        assert_eq!(
            press(&mut field, Key::Char('!')),
            Some(Msg::FieldChanged(ParamId(1), "max!".into()))
        );
        assert_eq!(press(&mut field, Key::Home), None);
        assert_eq!(
            press(&mut field, Key::Delete),
            Some(Msg::FieldChanged(ParamId(1), "ax!".into()))
        );
    }

    #[test]
    fn backspace_at_start_changes_nothing() {
        let mut field = field("");
        field.start_editing();
        assert_eq!(press(&mut field, Key::Backspace), None);
    }

    #[test]
    fn tab_leaves_editing() {
        let mut field = field("a");
        field.start_editing();
        assert_eq!(press(&mut field, Key::Tab), Some(Msg::FocusNext));
        assert!(!field.editing);
    }

    #[test]
    fn unfocused_field_ignores_input() {
        let mut field = field("a");
        field.attr(Attribute::Focus, AttrValue::Flag(false));
        field.start_editing();
        assert_eq!(press(&mut field, Key::Char('b')), None);
    }

    #[test]
    fn cursor_counts_chars() {
        let mut field = field("né");
        field.start_editing();
        press(&mut field, Key::Left);
        assert_eq!(
            press(&mut field, Key::Char('x')),
            Some(Msg::FieldChanged(ParamId(1), "nxé".into()))
        );
    }

    #[test]
    fn renders_value_without_error() {
        let mut field = field("casual");
        let terminal = render(&mut field);
        let screen = screen(&terminal);

        assert!(screen.contains("Purpose:"));
        assert!(screen.contains("casual"));
        assert!(!screen.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn renders_error_below_red_input() {
        let mut field = field("");
        field.attr(FIELD_ERROR, field_error_attr(Some(&FieldError::Empty)));
        let terminal = render(&mut field);

        assert!(screen(&terminal).contains(EMPTY_MESSAGE));
        let corner = terminal.backend().buffer().cell((0, 1)).unwrap();
        assert_eq!(corner.fg, Color::Red);
    }

    #[test]
    fn cleared_error_is_not_rendered() {
        let mut field = field("x");
        field.attr(FIELD_ERROR, field_error_attr(Some(&FieldError::Empty)));
        field.attr(FIELD_ERROR, field_error_attr(None));
        let terminal = render(&mut field);

        assert!(!screen(&terminal).contains(EMPTY_MESSAGE));
    }

    #[test]
    fn typing_a_bound_letter_starts_editing() {
        let mut field = field("");
        assert_eq!(
            press(&mut field, Key::Char('f')),
            Some(Msg::FieldChanged(ParamId(1), "f".into()))
        );
        assert!(field.editing);
        assert_eq!(
            press(&mut field, Key::Char('o')),
            Some(Msg::FieldChanged(ParamId(1), "fo".into()))
        );
    }

    #[test]
    fn letters_without_form_actions_are_typed() {
        for c in ['r', '/', 'a'] {
            let mut field = field("");
            assert_eq!(
                press(&mut field, Key::Char(c)),
                Some(Msg::FieldChanged(ParamId(1), c.to_string())),
                "key {c:?}"
            );
        }
    }

    #[test]
    fn form_shortcuts_still_apply_outside_editing() {
        let mut field = field("casual");
        assert_eq!(press(&mut field, Key::Char('s')), Some(Msg::Save));
        assert_eq!(press(&mut field, Key::Char('p')), Some(Msg::SwitchToPreview));
        assert!(!field.editing);
    }
}
