//! Application state and logic.

use crossterm::event::KeyCode;
use strictly_gato::{GameSession, GameStatus, KeyValueStore, MoveOutcome, Player, Position};
use tracing::{debug, info};

use super::input::{digit_position, move_cursor};

/// What the end-of-game panel announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Confetti that runs for a fixed number of ticks after a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    frame: u16,
    total: u16,
}

impl Celebration {
    fn new(total: u16) -> Self {
        Self { frame: 0, total }
    }

    /// Ticks elapsed since the win.
    pub fn frame(&self) -> u16 {
        self.frame
    }

    /// Advances one tick; false once the celebration is over.
    fn advance(&mut self) -> bool {
        self.frame = self.frame.saturating_add(1);
        self.frame < self.total
    }
}

/// Main application state.
pub struct App<S> {
    session: GameSession<S>,
    cursor: Position,
    dialog: Option<Outcome>,
    celebration: Option<Celebration>,
    celebration_frames: u16,
    status_message: String,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Creates the application around a restored session.
    ///
    /// A session that comes back already decided opens straight onto the
    /// end-of-game panel, without the celebration.
    pub fn new(session: GameSession<S>, celebration_frames: u16) -> Self {
        let dialog = Outcome::from_status(session.status());
        let status_message = turn_message(session.turn());
        Self {
            session,
            cursor: Position::Center,
            dialog,
            celebration: None,
            celebration_frames,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// End-of-game panel contents, when it is open.
    pub fn dialog(&self) -> Option<Outcome> {
        self.dialog
    }

    /// Running celebration, if any.
    pub fn celebration(&self) -> Option<Celebration> {
        self.celebration
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            // The end-of-game panel is modal.
            _ if self.dialog.is_some() => {}
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => {}
        }
    }

    /// Advances timed effects by one tick.
    pub fn tick(&mut self) {
        if let Some(celebration) = &mut self.celebration
            && !celebration.advance()
        {
            debug!("Celebration finished");
            self.celebration = None;
        }
    }

    fn play(&mut self, pos: Position) {
        let outcome = self.session.play_move(pos);
        debug!(?outcome, position = %pos, "Move handled");

        match outcome {
            MoveOutcome::Ignored => {
                self.status_message = format!("{} is already taken", pos.label());
            }
            MoveOutcome::Continue => {
                self.status_message = turn_message(self.session.turn());
            }
            MoveOutcome::Won(player) => {
                info!(%player, "Player won");
                self.status_message = format!("{} wins!", player);
                self.celebration = Some(Celebration::new(self.celebration_frames));
                self.dialog = Some(Outcome::Winner(player));
            }
            MoveOutcome::Draw => {
                info!("Game drawn");
                self.status_message = "Draw!".to_string();
                self.dialog = Some(Outcome::Draw);
            }
        }
    }

    /// Restarts the game and closes the end-of-game panel.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.dialog = None;
        self.celebration = None;
        self.cursor = Position::Center;
        self.status_message = turn_message(self.session.turn());
    }
}

fn turn_message(turn: Player) -> String {
    format!("{} to move", turn)
}
