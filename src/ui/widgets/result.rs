use super::{border_style, FormWidget};
use crate::form::FormController;
use crate::review::ReviewResult;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct ResultWidget {
    title: String,
}

impl Default for ResultWidget {
    fn default() -> Self {
        Self {
            title: "Review".to_string(),
        }
    }
}

fn label(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn result_lines(result: &ReviewResult) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![label("Tone: "), Span::raw(result.tone.as_str())]),
        Line::from(vec![
            label("Limitations: "),
            Span::raw(result.limitations.to_string()),
        ]),
        Line::from(""),
        Line::from(label("Suggestions:")),
    ];
    lines.extend(result.suggestions.split('\n').map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from(label("Revised Post:")));
    lines.extend(result.revised_post.split('\n').map(Line::from));
    lines
}

impl FormWidget for ResultWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, frame: &mut Frame, area: Rect, form: &FormController, focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(format!(" {} ", self.title));

        let lines = match form.result() {
            Some(result) => result_lines(result),
            None if form.is_loading() => vec![Line::from(Span::styled(
                "Reviewing...",
                Style::default().fg(Color::Yellow),
            ))],
            None => vec![Line::from(Span::styled(
                "No review yet. Press Ctrl+R to review the post.",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Limitations;
    use crate::ui::widgets::test_support::{contains_row, render_rows};

    fn form_with(result: ReviewResult) -> FormController {
        let mut form = FormController::default();
        let pending = form.begin_submit().unwrap();
        form.complete(pending.seq, Ok(result));
        form
    }

    #[test]
    fn test_renders_every_field_verbatim() {
        let form = form_with(ReviewResult {
            tone: "Excited".to_string(),
            limitations: Limitations {
                char_limit: Some(280),
                hashtag_limit: Some(2),
            },
            suggestions: "Add a call to action.".to_string(),
            revised_post: "Check out our new product! #Launch".to_string(),
        });

        let rows = render_rows(&ResultWidget::default(), &form, 70, 12);
        assert!(contains_row(&rows, "Tone: Excited"));
        assert!(contains_row(
            &rows,
            "Limitations: Char Limit: 280, Hashtags: 2"
        ));
        assert!(contains_row(&rows, "Suggestions:"));
        assert!(contains_row(&rows, "Add a call to action."));
        assert!(contains_row(&rows, "Revised Post:"));
        assert!(contains_row(&rows, "Check out our new product! #Launch"));
    }

    #[test]
    fn test_missing_char_limit_renders_not_reported() {
        let form = form_with(ReviewResult {
            tone: "Professional".to_string(),
            limitations: Limitations {
                char_limit: None,
                hashtag_limit: Some(30),
            },
            suggestions: String::new(),
            revised_post: String::new(),
        });

        let rows = render_rows(&ResultWidget::default(), &form, 70, 12);
        assert!(contains_row(&rows, "Tone: Professional"));
        assert!(contains_row(&rows, "Char Limit: not reported, Hashtags: 30"));
    }

    #[test]
    fn test_loading_without_result() {
        let mut form = FormController::default();
        form.begin_submit().unwrap();
        let rows = render_rows(&ResultWidget::default(), &form, 40, 5);
        assert!(contains_row(&rows, "Reviewing..."));
    }
}
