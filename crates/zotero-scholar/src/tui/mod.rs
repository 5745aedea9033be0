//! Terminal User Interface Module
//!
//! Interactive search screen built with Ratatui.
//!
//! ```text
//! ┌─ Search ────────────────────────────────────────────────┐
//! │ > graph theory█                            ⠋ Searching  │
//! └─────────────────────────────────────────────────────────┘
//! ┌─ Articles (1) ──────────────────────────────────────────┐
//! │▶ Graphs                                                 │
//! │  Euler                                                  │
//! └─────────────────────────────────────────────────────────┘
//! ┌─ Selected ──────────────────────────────────────────────┐
//! │ Graphs / Euler / Citations: 42 / Influential: 7         │
//! └─────────────────────────────────────────────────────────┘
//! [Enter] Search  [Tab] Results  [Esc] Dismiss  [Ctrl+Q] Quit
//! ```
//!
//! The loop owns the [`App`]. Lookups run on spawned tasks and come back
//! over the completion channel, so no state is shared between tasks.

pub mod app;
pub mod event;
pub mod ui;

pub use app::{App, Focus};
pub use event::{AppAction, EventHandler};

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use crate::controller::{CompletionReceiver, SearchController, completion_channel};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Tick rate for the spinner and notification expiry.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI application
pub async fn run(controller: SearchController) -> anyhow::Result<()> {
    info!("Starting TUI mode");

    let mut terminal = init_terminal()?;

    let (tx, mut completions) = completion_channel();
    let mut app = App::new(controller, tx);
    let mut events = EventHandler::new(TICK_RATE);

    let result = run_app(&mut terminal, &mut app, &mut events, &mut completions).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    events: &mut EventHandler,
    completions: &mut CompletionReceiver,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            action = events.next() => match action {
                Some(action) => app.handle_action(action),
                None => break,
            },
            Some(completion) = completions.recv() => app.apply(completion),
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI exited normally");
    Ok(())
}
