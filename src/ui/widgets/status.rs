use super::FormWidget;
use crate::form::FormController;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HELP: &str = "Tab switch field | ←/→ platform | Ctrl+R review | Esc quit";

/// One-line footer: loading indicator, last failure, or key help.
pub struct StatusWidget {
    endpoint: String,
}

impl StatusWidget {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl FormWidget for StatusWidget {
    fn title(&self) -> &str {
        "Status"
    }

    fn render(&self, frame: &mut Frame, area: Rect, form: &FormController, _focused: bool) {
        let line = if form.is_loading() {
            Line::from(Span::styled(
                format!("Reviewing... ({})", self.endpoint),
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(error) = form.last_error() {
            Line::from(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(vec![
                Span::styled(HELP, Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("  [{}]", self.endpoint),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
