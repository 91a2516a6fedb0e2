use crate::form::FormController;
use crate::review::{ReviewError, ReviewResult, Reviewer};
use crate::ui::widgets::{ComposeWidget, FormWidget, PlatformWidget, ResultWidget, StatusWidget};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Platform,
}

/// Outcome of a background review, tagged with its submission.
#[derive(Debug)]
pub struct ReviewMessage {
    pub seq: u64,
    pub outcome: Result<ReviewResult, ReviewError>,
}

pub struct App {
    form: FormController,
    reviewer: Arc<dyn Reviewer>,
    focus: Focus,
    should_quit: bool,
    tx: mpsc::UnboundedSender<ReviewMessage>,
    rx: mpsc::UnboundedReceiver<ReviewMessage>,
    in_flight: Option<JoinHandle<()>>,
    compose: ComposeWidget,
    platform: PlatformWidget,
    result: ResultWidget,
    status: StatusWidget,
}

impl App {
    pub fn new(form: FormController, reviewer: Arc<dyn Reviewer>, endpoint: &str) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            form,
            reviewer,
            focus: Focus::Editor,
            should_quit: false,
            tx,
            rx,
            in_flight: None,
            compose: ComposeWidget::default(),
            platform: PlatformWidget::default(),
            result: ResultWidget::default(),
            status: StatusWidget::new(endpoint),
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('r') if ctrl => self.submit(),
            KeyCode::F(5) => self.submit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Editor => Focus::Platform,
                    Focus::Platform => Focus::Editor,
                };
            }
            code => match self.focus {
                Focus::Editor => self.handle_editor_key(code, ctrl),
                Focus::Platform => self.handle_platform_key(code),
            },
        }
    }

    fn handle_editor_key(&mut self, code: KeyCode, ctrl: bool) {
        match code {
            KeyCode::Char(c) if !ctrl => self.form.push_char(c),
            KeyCode::Enter => self.form.push_char('\n'),
            KeyCode::Backspace => self.form.pop_char(),
            _ => {}
        }
    }

    fn handle_platform_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.form.prev_platform()
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.form.next_platform()
            }
            _ => {}
        }
    }

    /// Spawn the review in the background. Ignored while one is in flight.
    pub fn submit(&mut self) {
        let Some(pending) = self.form.begin_submit() else {
            return;
        };

        tracing::info!(
            seq = pending.seq,
            platform = %pending.request.platform,
            "submitting post for review"
        );

        let reviewer = Arc::clone(&self.reviewer);
        let tx = self.tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = reviewer.review(&pending.request).await;
            // Receiver is gone only when the app has shut down.
            let _ = tx.send(ReviewMessage {
                seq: pending.seq,
                outcome,
            });
        }));
    }

    pub fn apply(&mut self, message: ReviewMessage) {
        if self.form.complete(message.seq, message.outcome) {
            self.in_flight = None;
        }
    }

    /// Apply every outcome that has arrived since the last frame.
    pub fn drain_outcomes(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.apply(message);
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.shutdown();
    }

    /// Abort the in-flight review so its response never lands.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.form.cancel();
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Percentage(35),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let header = Paragraph::new(Line::from(Span::styled(
            "Social Media Post Reviewer",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        self.compose
            .render(frame, chunks[1], &self.form, self.focus == Focus::Editor);
        self.platform
            .render(frame, chunks[2], &self.form, self.focus == Focus::Platform);
        self.result.render(frame, chunks[3], &self.form, false);
        self.status.render(frame, chunks[4], &self.form, false);
    }
}
