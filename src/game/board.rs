use super::player::Player;

pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const CELLS: usize = COLS * ROWS;

/// The four undirected scan axes: horizontal, vertical, and both diagonals.
/// Signed pairs, so each line is tested exactly once per starting cell.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// A 7x6 Connect Four grid. Column 0 is leftmost; row 0 is the bottom,
/// so tokens stack upward from row 0.
///
/// `place_token` is the only way to occupy a cell, which keeps the
/// fill count in step with the grid and every column a contiguous stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; ROWS]; COLS],
    winning: [[bool; ROWS]; COLS],
    filled: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLS],
            winning: [[false; ROWS]; COLS],
            filled: 0,
        }
    }

    /// Get the cell at a position; (0, 0) is the bottom-left corner.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[col][row]
    }

    /// True if the cell is part of the detected winning line.
    pub fn is_winning(&self, col: usize, row: usize) -> bool {
        self.winning[col][row]
    }

    /// Number of occupied cells, 0..=42.
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[col][ROWS - 1] != Cell::Empty
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.filled == CELLS
    }

    /// The row a token dropped in `col` would land in, or `None` if the
    /// column is full. Columns are contiguous stacks, so the lowest empty
    /// row is exactly the gravity drop row.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.cells[col][row] == Cell::Empty)
    }

    /// Drop a token in a column, returns the row where it landed.
    ///
    /// On `ColumnFull` or `InvalidColumn` the board is left untouched.
    pub fn place_token(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        let row = self.drop_row(col).ok_or(MoveError::ColumnFull)?;
        self.cells[col][row] = player.to_cell();
        self.filled += 1;
        Ok(row)
    }

    /// Search the whole board for a four-in-a-row of `player`'s color.
    ///
    /// Scans column-major from every owned cell along the four axes.
    /// The first line found gets its four cells flagged as winning and
    /// the scan stops there; simultaneous lines beyond the first are
    /// neither searched for nor flagged.
    pub fn test_win(&mut self, player: Player) -> bool {
        let target = player.to_cell();
        for col in 0..COLS {
            for row in 0..ROWS {
                if self.cells[col][row] != target {
                    continue;
                }
                for &(dc, dr) in &DIRECTIONS {
                    if self.is_line(target, col, row, dc, dr) {
                        self.mark_line(col, row, dc, dr);
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Do the three cells after (col, row) along (dc, dr) hold `target`?
    fn is_line(&self, target: Cell, col: usize, row: usize, dc: i32, dr: i32) -> bool {
        for i in 1..4 {
            let c = col as i32 + dc * i;
            let r = row as i32 + dr * i;
            if c < 0 || c >= COLS as i32 || r < 0 || r >= ROWS as i32 {
                return false;
            }
            if self.cells[c as usize][r as usize] != target {
                return false;
            }
        }
        true
    }

    /// Flag the four cells starting at (col, row) along (dc, dr).
    fn mark_line(&mut self, col: usize, row: usize, dc: i32, dr: i32) {
        for i in 0..4 {
            let c = (col as i32 + dc * i) as usize;
            let r = (row as i32 + dr * i) as usize;
            self.winning[c][r] = true;
        }
    }

    /// Reinitialize every cell to empty and non-winning.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; ROWS]; COLS];
        self.winning = [[false; ROWS]; COLS];
        self.filled = 0;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect the flagged cells as (col, row) pairs, column-major.
    fn winning_cells(board: &Board) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                if board.is_winning(col, row) {
                    cells.push((col, row));
                }
            }
        }
        cells
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                assert_eq!(board.get(col, row), Cell::Empty);
                assert!(!board.is_winning(col, row));
            }
        }
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_tokens_stack_from_the_bottom() {
        let mut board = Board::new();

        let row = board.place_token(3, Player::Red).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(3, 0), Cell::Red);

        let row = board.place_token(3, Player::Yellow).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(3, 1), Cell::Yellow);
    }

    #[test]
    fn test_filled_count_tracks_placements() {
        let mut board = Board::new();
        for (n, col) in [3, 3, 0, 6, 2].into_iter().enumerate() {
            board.place_token(col, Player::Red).unwrap();
            assert_eq!(board.filled_count(), n + 1);
        }
    }

    #[test]
    fn test_full_column_rejected_without_mutation() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place_token(0, Player::Red).unwrap();
        }
        assert!(board.is_column_full(0));

        let before = board.clone();
        assert_eq!(
            board.place_token(0, Player::Yellow),
            Err(MoveError::ColumnFull)
        );
        assert_eq!(board, before);
        assert_eq!(board.filled_count(), ROWS);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.place_token(COLS, Player::Red),
            Err(MoveError::InvalidColumn)
        );
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_drop_row() {
        let mut board = Board::new();
        assert_eq!(board.drop_row(4), Some(0));
        board.place_token(4, Player::Red).unwrap();
        assert_eq!(board.drop_row(4), Some(1));
        for _ in 1..ROWS {
            board.place_token(4, Player::Red).unwrap();
        }
        assert_eq!(board.drop_row(4), None);
        assert_eq!(board.drop_row(COLS), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place_token(col, Player::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.filled_count(), CELLS);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 2..6 {
            board.place_token(col, Player::Red).unwrap();
        }
        assert!(board.test_win(Player::Red));
        assert_eq!(winning_cells(&board), vec![(2, 0), (3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.place_token(1, Player::Yellow).unwrap();
        }
        assert!(board.test_win(Player::Yellow));
        assert!(!board.test_win(Player::Red));
        assert_eq!(winning_cells(&board), vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_rising_diagonal_win() {
        let mut board = Board::new();
        board.place_token(0, Player::Red).unwrap();

        board.place_token(1, Player::Yellow).unwrap();
        board.place_token(1, Player::Red).unwrap();

        board.place_token(2, Player::Yellow).unwrap();
        board.place_token(2, Player::Yellow).unwrap();
        board.place_token(2, Player::Red).unwrap();

        board.place_token(3, Player::Yellow).unwrap();
        board.place_token(3, Player::Yellow).unwrap();
        board.place_token(3, Player::Yellow).unwrap();
        board.place_token(3, Player::Red).unwrap();

        assert!(board.test_win(Player::Red));
        assert_eq!(winning_cells(&board), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_falling_diagonal_win() {
        let mut board = Board::new();
        board.place_token(6, Player::Red).unwrap();

        board.place_token(5, Player::Yellow).unwrap();
        board.place_token(5, Player::Red).unwrap();

        board.place_token(4, Player::Yellow).unwrap();
        board.place_token(4, Player::Yellow).unwrap();
        board.place_token(4, Player::Red).unwrap();

        board.place_token(3, Player::Yellow).unwrap();
        board.place_token(3, Player::Yellow).unwrap();
        board.place_token(3, Player::Yellow).unwrap();
        board.place_token(3, Player::Red).unwrap();

        // The column-major scan reaches (3, 3) first and walks the
        // (+1, -1) axis down to (6, 0).
        assert!(board.test_win(Player::Red));
        assert_eq!(winning_cells(&board), vec![(3, 3), (4, 2), (5, 1), (6, 0)]);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place_token(col, Player::Red).unwrap();
        }
        assert!(!board.test_win(Player::Red));
        assert!(winning_cells(&board).is_empty());
    }

    #[test]
    fn test_only_first_found_line_is_marked() {
        let mut board = Board::new();
        // Two disjoint horizontal red lines, at row 0 and row 2.
        for col in 0..4 {
            board.place_token(col, Player::Red).unwrap();
            board.place_token(col, Player::Yellow).unwrap();
            board.place_token(col, Player::Red).unwrap();
        }
        assert!(board.test_win(Player::Red));
        // The scan starts at (0, 0) and finds the row-0 line first.
        assert_eq!(winning_cells(&board), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_test_win_is_idempotent() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place_token(col, Player::Red).unwrap();
        }
        assert!(board.test_win(Player::Red));
        let first = winning_cells(&board);
        assert!(board.test_win(Player::Red));
        assert_eq!(winning_cells(&board), first);
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place_token(col, Player::Red).unwrap();
        }
        board.test_win(Player::Red);

        board.reset();
        assert_eq!(board, Board::new());
    }
}
