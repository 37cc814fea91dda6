use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::board::{Board, COLS, ROWS};
use crate::game::Player;

/// Score of a move that completes an AI four-in-a-row. Everything else
/// scores 0..=3, the longest same-color run the move extends or blocks.
const WIN_SCORE: u8 = 4;

/// The greedy move picker: rates each playable column by its immediate
/// neighborhood, takes a winning move when one exists, and otherwise
/// plays toward the longest run of either color. No lookahead; a player
/// threat only gets blocked when the neighbor counts say so.
pub struct HeuristicAi<R: Rng = StdRng> {
    rng: R,
}

impl HeuristicAi<StdRng> {
    pub fn new() -> Self {
        HeuristicAi {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor for reproducible tie-breaks.
    pub fn seeded(seed: u64) -> Self {
        HeuristicAi {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> HeuristicAi<R> {
    pub fn with_rng(rng: R) -> Self {
        HeuristicAi { rng }
    }

    /// Pick a column for the AI to play, uniformly at random among the
    /// best-scoring playable columns. `None` only when every column is
    /// full.
    pub fn choose_column(&mut self, board: &Board, ai: Player, player: Player) -> Option<usize> {
        let candidates = best_columns(board, ai, player);
        if candidates.is_empty() {
            return None;
        }
        let col = candidates[self.rng.random_range(0..candidates.len())];
        debug!("ai candidates {candidates:?}, picked column {col}");
        Some(col)
    }
}

impl Default for HeuristicAi<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

/// All playable columns that achieve the maximum move score, in column
/// order. Full columns are never candidates; the result is empty only
/// for a full board.
pub fn best_columns(board: &Board, ai: Player, player: Player) -> Vec<usize> {
    let mut best = 0;
    let mut columns = Vec::new();
    for col in 0..COLS {
        let Some(row) = board.drop_row(col) else {
            continue;
        };
        let score = score_move(board, col, row, ai, player);
        if columns.is_empty() || score > best {
            best = score;
            columns.clear();
            columns.push(col);
        } else if score == best {
            columns.push(col);
        }
    }
    columns
}

/// Rate dropping a token at (col, row), 0..=4.
///
/// Both colors are scored by their longest run through the cell; 3 AI
/// neighbors means the drop completes a four and scores `WIN_SCORE`.
/// Otherwise extending a run and blocking one are worth the same.
fn score_move(board: &Board, col: usize, row: usize, ai: Player, player: Player) -> u8 {
    let ai_run = longest_run(board, col, row, ai);
    if ai_run == 3 {
        return WIN_SCORE;
    }
    ai_run.max(longest_run(board, col, row, player))
}

/// The longest run of `color` the cell (col, row) would join, per axis:
/// horizontal and the two diagonals combine both directions (capped at
/// 3), vertical counts downward only since the cells above a drop row
/// are always empty.
fn longest_run(board: &Board, col: usize, row: usize, color: Player) -> u8 {
    let count = |dc: i32, dr: i32| count_neighbors(board, col, row, color, dc, dr);

    let horizontal = 3.min(count(1, 0) + count(-1, 0));
    let vertical = count(0, -1);
    let rising = 3.min(count(1, 1) + count(-1, -1));
    let falling = 3.min(count(-1, 1) + count(1, -1));

    horizontal.max(vertical).max(rising).max(falling)
}

/// Number of consecutive `color` tokens adjacent to (col, row) along
/// (dc, dr), walking at most 3 steps and stopping at the first edge or
/// other-colored cell.
fn count_neighbors(board: &Board, col: usize, row: usize, color: Player, dc: i32, dr: i32) -> u8 {
    let target = color.to_cell();
    let mut count = 0;
    for i in 1..=3 {
        let c = col as i32 + dc * i;
        let r = row as i32 + dr * i;
        if c < 0 || c >= COLS as i32 || r < 0 || r >= ROWS as i32 {
            break;
        }
        if board.get(c as usize, r as usize) != target {
            break;
        }
        count += 1;
    }
    count
}
