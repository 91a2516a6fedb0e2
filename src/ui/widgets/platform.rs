use super::{border_style, FormWidget};
use crate::form::FormController;
use crate::platform::Platform;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub struct PlatformWidget {
    title: String,
}

impl Default for PlatformWidget {
    fn default() -> Self {
        Self {
            title: "Platform".to_string(),
        }
    }
}

impl FormWidget for PlatformWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, frame: &mut Frame, area: Rect, form: &FormController, focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(format!(" {} ", self.title));

        let selected = Platform::ALL
            .iter()
            .position(|p| *p == form.platform())
            .unwrap_or(0);

        let tabs = Tabs::new(Platform::ALL.iter().map(|p| p.as_str()))
            .block(block)
            .select(selected)
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );
        frame.render_widget(tabs, area);
    }
}
