//! Terminal UI for Strictly Gato

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use strictly_gato::{GameSession, KeyValueStore};
use tracing::{error, info, instrument};

use crate::config::GatoConfig;
use app::App;

/// Time between celebration frames.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the TUI on the game saved in `store`.
#[instrument(skip_all)]
pub fn run_tui<S: KeyValueStore>(store: S, config: &GatoConfig) -> Result<()> {
    info!("Starting Strictly Gato TUI");

    let session = GameSession::restore(store);
    let mut app = App::new(session, *config.celebration_frames());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, wait for a key or the next tick, repeat until quit.
fn run_app<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
