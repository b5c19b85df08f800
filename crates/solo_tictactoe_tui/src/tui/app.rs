//! Application state for the interactive board.

use solo_tictactoe::{GameResult, Position};
use solo_tictactoe_tui::{SessionEvent, Snapshot};
use tracing::debug;

/// What the screen shows.
pub struct App {
    snapshot: Snapshot,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates the app from the session's first snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            cursor: Position::Center,
            status_message: "Your move. You are X.".to_string(),
        }
    }

    /// Latest session snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Text for the status bar.
    pub fn status_message(&self) -> &str {
        if self.snapshot.input_disabled {
            "Computer is thinking..."
        } else {
            &self.status_message
        }
    }

    /// True while an end-of-game announcement is on screen.
    pub fn alert_open(&self) -> bool {
        self.snapshot.alert().is_some()
    }

    /// Moves the highlight.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Replaces the snapshot after a direct session call.
    ///
    /// Snapshots from a game older than the one on screen are dropped.
    pub fn apply(&mut self, snapshot: Snapshot) {
        if snapshot.generation < self.snapshot.generation {
            debug!(
                stale = snapshot.generation,
                current = self.snapshot.generation,
                "Dropping snapshot from an earlier game"
            );
            return;
        }
        if snapshot.generation != self.snapshot.generation {
            self.status_message = "New game. Your move.".to_string();
        }
        self.snapshot = snapshot;
    }

    /// Handles a session event.
    pub fn handle_event(&mut self, event: SessionEvent) {
        debug!(?event, "Handling session event");

        if event.generation() < self.snapshot.generation {
            debug!(current = self.snapshot.generation, "Dropping event from an earlier game");
            return;
        }

        match event {
            SessionEvent::Updated(snapshot) => self.apply(snapshot),
            SessionEvent::ComputerThinking { .. } => {}
            SessionEvent::ComputerMoved {
                position, tactic, ..
            } => {
                self.status_message = format!("Computer took {} ({}). Your move.", position, tactic);
            }
            SessionEvent::GameOver { result, .. } => {
                self.status_message = match result {
                    GameResult::HumanWin => "You won.".to_string(),
                    GameResult::ComputerWin => "The computer won.".to_string(),
                    GameResult::Draw => "Draw.".to_string(),
                    GameResult::Ongoing => self.status_message.clone(),
                };
            }
        }
    }
}
