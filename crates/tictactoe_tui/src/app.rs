//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::{GameEngine, GameStatus, GameView, Position};
use tracing::{debug, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Holds the engine plus the UI-only state derived around it: the selected
/// cell and the last rejection notice.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    notice: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game and the cursor centred.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            notice: None,
        }
    }

    /// Snapshot of the game to render.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// Currently selected cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Message explaining the last rejected move, cleared by the next action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        let view = self.engine.view();
        match view.status() {
            GameStatus::InProgress => format!("Player {}'s turn", view.active_player()),
            GameStatus::Won { player, .. } => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Applies a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play(index);
            }
            _ => {}
        }
        Action::Continue
    }

    /// Plays the active player's mark at `index`, recording any rejection.
    pub fn play(&mut self, index: usize) {
        match self.engine.apply_move(index) {
            Ok(status) => {
                debug!(index, ?status, "Move accepted");
                self.notice = None;
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    /// Starts a new game.
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.notice = None;
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = self.cursor.row().saturating_add_signed(d_row).min(2);
        let col = self.cursor.col().saturating_add_signed(d_col).min(2);
        if let Some(pos) = Position::from_row_col(row, col) {
            self.cursor = pos;
        }
        self.notice = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
