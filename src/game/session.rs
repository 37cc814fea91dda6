use log::{debug, info};

use super::board::{self, Board, CELLS};
use super::Player;

/// Where the session currently is in the choose/play/replay loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ChoosingColor,
    PlayerTurn,
    AiTurn,
    PlayerWon,
    AiWon,
    Draw,
}

impl Stage {
    /// True for the three end-of-game display stages.
    pub fn is_game_over(self) -> bool {
        matches!(self, Stage::PlayerWon | Stage::AiWon | Stage::Draw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    ColumnFull,
    InvalidColumn,
    /// The event arrived in a stage that does not expect it. Callers
    /// treat this as a no-op, never as a fatal condition.
    WrongStage,
}

impl From<board::MoveError> for EventError {
    fn from(err: board::MoveError) -> Self {
        match err {
            board::MoveError::ColumnFull => EventError::ColumnFull,
            board::MoveError::InvalidColumn => EventError::InvalidColumn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Colors {
    player: Player,
    ai: Player,
}

/// One game session: the board plus the turn state machine.
///
/// All mutation happens through the three external events (`choose_color`,
/// `choose_column`, `continue_after_game_end`) and the AI turn; each runs
/// to completion synchronously. Token placement is routed exclusively
/// through `Board::place_token`.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    stage: Stage,
    colors: Option<Colors>,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            stage: Stage::ChoosingColor,
            colors: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_color(&self) -> Option<Player> {
        self.colors.map(|c| c.player)
    }

    pub fn ai_color(&self) -> Option<Player> {
        self.colors.map(|c| c.ai)
    }

    /// Is it currently legal for the player to drop a token in `col`?
    pub fn can_choose_column(&self, col: usize) -> bool {
        self.stage == Stage::PlayerTurn && !self.board.is_column_full(col)
    }

    /// Color-choice event: the player takes `color`, the AI takes the
    /// other, and play starts on a fresh board. Ignored outside
    /// `ChoosingColor`.
    pub fn choose_color(&mut self, color: Player) {
        if self.stage != Stage::ChoosingColor {
            debug!("ignoring color choice during {:?}", self.stage);
            return;
        }
        self.colors = Some(Colors {
            player: color,
            ai: color.other(),
        });
        self.board.reset();
        self.stage = Stage::PlayerTurn;
        info!(
            "new game: player is {}, ai is {}",
            color.name(),
            color.other().name()
        );
    }

    /// Column-choice event for the player's turn.
    ///
    /// A full column leaves the stage unchanged so the player can pick
    /// again. After a successful placement the session moves on to
    /// `PlayerWon`, `Draw` when the token filled the last cell, or
    /// `AiTurn`.
    pub fn choose_column(&mut self, col: usize) -> Result<(), EventError> {
        if self.stage != Stage::PlayerTurn {
            debug!("ignoring column choice during {:?}", self.stage);
            return Err(EventError::WrongStage);
        }
        let Some(colors) = self.colors else {
            return Err(EventError::WrongStage);
        };

        let row = self.board.place_token(col, colors.player)?;
        debug!("player move: column {col}, row {row}");

        if self.board.test_win(colors.player) {
            info!("player wins");
            self.stage = Stage::PlayerWon;
        } else if self.board.filled_count() == CELLS {
            // End the game here instead of handing a full board to the
            // AI. Unreachable under strict alternation (the 42nd token
            // is always the AI's), kept as the draw backstop.
            info!("draw: board full");
            self.stage = Stage::Draw;
        } else {
            self.stage = Stage::AiTurn;
        }
        Ok(())
    }

    /// Run the AI's turn: ask `choose` for a column given the board and
    /// the two colors, place the token, and advance the stage. Ignored
    /// outside `AiTurn`.
    ///
    /// A `None` from `choose` means no legal move is left; that resolves
    /// to `Draw`.
    pub fn play_ai_move(&mut self, choose: impl FnOnce(&Board, Player, Player) -> Option<usize>) {
        if self.stage != Stage::AiTurn {
            debug!("ignoring ai turn during {:?}", self.stage);
            return;
        }
        let Some(colors) = self.colors else {
            return;
        };

        let Some(col) = choose(&self.board, colors.ai, colors.player) else {
            info!("draw: no legal move for ai");
            self.stage = Stage::Draw;
            return;
        };
        let row = match self.board.place_token(col, colors.ai) {
            Ok(row) => row,
            Err(err) => {
                // The heuristic only offers playable columns.
                log::error!("ai chose unplayable column {col}: {err:?}");
                self.stage = Stage::Draw;
                return;
            }
        };
        debug!("ai move: column {col}, row {row}");

        if self.board.test_win(colors.ai) {
            info!("ai wins");
            self.stage = Stage::AiWon;
        } else if self.board.filled_count() == CELLS {
            info!("draw: board full");
            self.stage = Stage::Draw;
        } else {
            self.stage = Stage::PlayerTurn;
        }
    }

    /// Replay event: from any end-of-game stage, clear the board and
    /// colors and return to the color choice. Ignored mid-game.
    pub fn continue_after_game_end(&mut self) {
        if !self.stage.is_game_over() {
            debug!("ignoring continue during {:?}", self.stage);
            return;
        }
        self.board.reset();
        self.colors = None;
        self.stage = Stage::ChoosingColor;
        info!("back to color choice");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
