//! Read-only panel listing the model's passthrough colors.

use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::tui::activities::{Msg, form::UserEvent};

/// Terminal color for a CSS color string, if it parses.
pub fn swatch_color(css: &str) -> Option<Color> {
    let color = css.parse::<csscolorparser::Color>().ok()?;
    let [r, g, b, _] = color.to_rgba8();
    Some(Color::Rgb(r, g, b))
}

/// Swatch list of the passthrough colors. Display only.
pub struct Colors {
    props: Props,
    colors: Vec<String>,
}

impl Colors {
    pub fn new(colors: Vec<String>) -> Self {
        Self {
            props: Props::default(),
            colors,
        }
    }
}

impl MockComponent for Colors {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" Colors ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dim = Style::default().add_modifier(Modifier::DIM);
        let lines: Vec<Line> = if self.colors.is_empty() {
            vec![Line::from(Span::styled("(none)", dim))]
        } else {
            self.colors
                .iter()
                .map(|css| match swatch_color(css) {
                    Some(color) => Line::from(vec![
                        Span::styled("██", Style::default().fg(color)),
                        Span::raw(format!(" {css}")),
                    ]),
                    None => Line::from(vec![
                        Span::styled("??", dim),
                        Span::raw(format!(" {css}")),
                    ]),
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for Colors {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        None
    }
}
