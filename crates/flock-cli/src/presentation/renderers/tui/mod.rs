//! Interactive dashboard renderer.
//!
//! Single-threaded event loop: draw, poll for input with a 250ms tick, and
//! apply state transitions one event at a time. All layout (including popup
//! placement) is re-derived from the current terminal size on every frame,
//! so resizes need no imperative handling.

mod app;
mod components;
mod input;
mod popup;
mod ui;

pub use app::AppState;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use flock_data::{BoardStore, PostRepository};

pub fn run(mut app: AppState, repo: &dyn PostRepository, store: &dyn BoardStore) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        std::process::exit(0);
    })?;

    let tick_rate = Duration::from_millis(250);

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key, repo, store),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse, repo, store),
                // Layout derives from the current size at draw time
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    Ok(())
}
