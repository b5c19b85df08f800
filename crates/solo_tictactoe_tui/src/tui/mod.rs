//! Interactive terminal board.

mod app;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::Action;
use ratatui::{Terminal, backend::CrosstermBackend};
use solo_tictactoe_tui::{GameConfig, GameSession, SessionEvent};
use std::io;
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive board until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting interactive board");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (session, mut events) = GameSession::new(&config);
    let res = run_game(&mut terminal, &session, &mut events).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &GameSession,
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> Result<()> {
    let mut app = App::new(session.snapshot().await);

    loop {
        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match input::action_for(key.code, app.cursor(), app.alert_open()) {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Reset => app.apply(session.reset().await),
            Action::Place(position) => {
                app.set_cursor(position);
                app.apply(session.submit_human_move(position).await);
            }
            Action::Cursor(position) => app.set_cursor(position),
            Action::Ignore => {}
        }
    }
}
