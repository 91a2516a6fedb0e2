pub mod compose;
pub mod platform;
pub mod result;
pub mod status;

use crate::form::FormController;
use ratatui::{layout::Rect, style::Color, style::Style, Frame};

pub use compose::ComposeWidget;
pub use platform::PlatformWidget;
pub use result::ResultWidget;
pub use status::StatusWidget;

/// A panel of the review form. Panels read the form, they never mutate it.
pub trait FormWidget {
    fn title(&self) -> &str;
    fn render(&self, frame: &mut Frame, area: Rect, form: &FormController, focused: bool);
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}
