use super::{border_style, FormWidget};
use crate::form::FormController;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PLACEHOLDER: &str = "Write your post here...";

pub struct ComposeWidget {
    title: String,
}

impl Default for ComposeWidget {
    fn default() -> Self {
        Self {
            title: "Post".to_string(),
        }
    }
}

impl FormWidget for ComposeWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, frame: &mut Frame, area: Rect, form: &FormController, focused: bool) {
        let count = form.text().chars().count();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(format!(" {} ({} chars) ", self.title, count));

        let mut lines: Vec<Line> = if form.text().is_empty() {
            vec![Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            form.text().split('\n').map(Line::from).collect()
        };

        if focused {
            // Cursor marker on the last line.
            if form.text().is_empty() {
                lines = vec![Line::from("█")];
            } else if let Some(last) = lines.last_mut() {
                last.push_span(Span::raw("█"));
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
