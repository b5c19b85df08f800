//! Paced play session: human moves in, delayed computer replies out.
//!
//! The computer's reply is a scheduled task tagged with the session's
//! generation counter. [`GameSession::reset`] bumps the counter, so a reply
//! that wakes up after a reset sees a different generation and drops itself
//! instead of landing on the fresh board.

use crate::config::GameConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use solo_tictactoe::{AlertItem, Board, GameEngine, GameResult, Position, Tactic};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tracing::{Instrument, debug, info, info_span, instrument, warn};

/// Read-only view of the session handed to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Current result.
    pub result: GameResult,
    /// True while the computer's reply is pending.
    pub input_disabled: bool,
    /// Game counter; increases on every reset.
    pub generation: u64,
}

impl Snapshot {
    /// Announcement to show, if the game has ended.
    pub fn alert(&self) -> Option<&'static AlertItem> {
        AlertItem::for_result(self.result)
    }
}

/// Notifications published to the front end.
///
/// Every event carries the generation of the game it belongs to, so a
/// consumer that has already seen a reset can drop leftovers from the
/// previous game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Board or flags changed.
    Updated(Snapshot),
    /// The computer's reply has been scheduled.
    ComputerThinking {
        /// Game the reply belongs to.
        generation: u64,
    },
    /// The computer placed its mark.
    ComputerMoved {
        /// Game the move belongs to.
        generation: u64,
        /// Square taken.
        position: Position,
        /// Rule that chose it.
        tactic: Tactic,
    },
    /// The game reached a terminal result.
    GameOver {
        /// Game that ended.
        generation: u64,
        /// How it ended.
        result: GameResult,
    },
}

impl SessionEvent {
    /// Generation of the game this event belongs to.
    pub fn generation(&self) -> u64 {
        match self {
            SessionEvent::Updated(snapshot) => snapshot.generation,
            SessionEvent::ComputerThinking { generation }
            | SessionEvent::ComputerMoved { generation, .. }
            | SessionEvent::GameOver { generation, .. } => *generation,
        }
    }
}

#[derive(Debug)]
struct SessionState {
    engine: GameEngine,
    rng: ChaCha8Rng,
    generation: u64,
    input_disabled: bool,
}

impl SessionState {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.engine.board().clone(),
            result: self.engine.result(),
            input_disabled: self.input_disabled,
            generation: self.generation,
        }
    }
}

/// One human against the computer, with a thinking pause between turns.
///
/// Cheap to clone; clones share the same game.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: Arc<Mutex<SessionState>>,
    min_delay: Duration,
    max_delay: Duration,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl GameSession {
    /// Creates a session and the receiver for its events.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let (min_delay, max_delay) = config.delay_range();
        let (events, receiver) = mpsc::unbounded_channel();

        info!(?min_delay, ?max_delay, "Creating game session");
        let session = Self {
            state: Arc::new(Mutex::new(SessionState {
                engine: GameEngine::new(),
                rng,
                generation: 0,
                input_disabled: false,
            })),
            min_delay,
            max_delay,
            events,
        };
        (session, receiver)
    }

    /// Current board, result and flags.
    pub async fn snapshot(&self) -> Snapshot {
        self.state.lock().await.snapshot()
    }

    /// Applies a human move and schedules the computer's reply.
    ///
    /// Ignored while a reply is pending, after the game has ended, or when
    /// the square is taken.
    #[instrument(skip(self))]
    pub async fn submit_human_move(&self, position: Position) -> Snapshot {
        let mut state = self.state.lock().await;
        if state.input_disabled {
            debug!("Input disabled while computer is thinking");
            return state.snapshot();
        }

        let recorded = state.engine.history().len();
        let result = state.engine.apply_human_move(position);
        if state.engine.history().len() == recorded {
            return state.snapshot();
        }

        if result.is_terminal() {
            let snapshot = state.snapshot();
            drop(state);
            self.publish(SessionEvent::Updated(snapshot.clone()));
            self.publish(SessionEvent::GameOver {
                generation: snapshot.generation,
                result,
            });
            return snapshot;
        }

        state.input_disabled = true;
        let delay = self.draw_delay(&mut state.rng);
        let generation = state.generation;
        let snapshot = state.snapshot();
        drop(state);

        self.publish(SessionEvent::Updated(snapshot.clone()));
        self.publish(SessionEvent::ComputerThinking { generation });
        self.schedule_reply(generation, delay);
        snapshot
    }

    /// Starts a new game. Any pending computer reply is discarded.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Snapshot {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.engine.reset_game();
        state.input_disabled = false;
        let snapshot = state.snapshot();
        drop(state);

        info!(generation = snapshot.generation, "New game");
        self.publish(SessionEvent::Updated(snapshot.clone()));
        snapshot
    }

    fn draw_delay(&self, rng: &mut ChaCha8Rng) -> Duration {
        if self.min_delay >= self.max_delay {
            self.min_delay
        } else {
            rng.gen_range(self.min_delay..self.max_delay)
        }
    }

    fn schedule_reply(&self, generation: u64, delay: Duration) {
        let session = self.clone();
        let span = info_span!("computer_reply", generation, ?delay);
        tokio::spawn(
            async move {
                tokio::time::sleep(delay).await;
                session.deliver_reply(generation).await;
            }
            .instrument(span),
        );
    }

    async fn deliver_reply(&self, generation: u64) {
        let mut state = self.state.lock().await;
        if state.generation != generation {
            debug!(current = state.generation, "Discarding reply from an earlier game");
            return;
        }

        let SessionState { engine, rng, .. } = &mut *state;
        let reply = engine.compute_computer_move(rng);
        state.input_disabled = false;
        let snapshot = state.snapshot();
        drop(state);

        match reply {
            Ok(reply) => {
                self.publish(SessionEvent::ComputerMoved {
                    generation,
                    position: reply.position,
                    tactic: reply.tactic,
                });
                self.publish(SessionEvent::Updated(snapshot.clone()));
                if snapshot.result.is_terminal() {
                    self.publish(SessionEvent::GameOver {
                        generation,
                        result: snapshot.result,
                    });
                }
            }
            Err(error) => {
                warn!(%error, "Computer could not move");
                self.publish(SessionEvent::Updated(snapshot));
            }
        }
    }

    fn publish(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}
