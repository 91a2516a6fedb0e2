pub mod app;
pub mod widgets;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Take over the terminal and run the form until the user quits.
pub async fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app).await;

    app.shutdown();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_outcomes();
        terminal.draw(|frame| app.render(frame))?;

        // crossterm polling blocks, so keep it off the runtime workers.
        let event = tokio::task::spawn_blocking(next_event).await??;
        if let Some(event) = event {
            handle_event(app, event);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn next_event() -> io::Result<Option<Event>> {
    if event::poll(TICK)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Route one terminal event to the app. Resizes need no handling: the next
/// frame is laid out against the new size.
pub fn handle_event(app: &mut App, event: Event) {
    if let Event::Key(key) = event {
        app.handle_key(key);
    }
}
