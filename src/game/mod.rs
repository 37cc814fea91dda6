//! Core Connect Four game logic: board representation, player types, and
//! the turn state machine driven by external input events.

pub mod board;
mod player;
mod session;

pub use board::{Board, Cell, MoveError, CELLS, COLS, ROWS};
pub use player::Player;
pub use session::{EventError, GameSession, Stage};
