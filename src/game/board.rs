//! Board, cell and role types.
//!
//! Cells are indexed 0..9 in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```

use std::fmt;

pub const CELL_COUNT: usize = 9;
pub const SIDE: usize = 3;

/// Turn identity. `First` always opens a round and plays `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerRole {
    First,
    Second,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 2] = [PlayerRole::First, PlayerRole::Second];

    pub fn other(self) -> Self {
        match self {
            PlayerRole::First => PlayerRole::Second,
            PlayerRole::Second => PlayerRole::First,
        }
    }

    pub fn mark(self) -> char {
        match self {
            PlayerRole::First => 'X',
            PlayerRole::Second => 'O',
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerRole::First => 0,
            PlayerRole::Second => 1,
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mark(PlayerRole),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a 9-character pattern of `X`, `O` and anything
    /// else for empty, e.g. `"XX.OO...."`.
    #[cfg(test)]
    pub fn from_pattern(pattern: &str) -> Self {
        let mut board = Board::new();
        for (i, ch) in pattern.chars().take(CELL_COUNT).enumerate() {
            board.cells[i] = match ch {
                'X' => Cell::Mark(PlayerRole::First),
                'O' => Cell::Mark(PlayerRole::Second),
                _ => Cell::Empty,
            };
        }
        board
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Mark an empty cell. Returns `false` (and leaves the board untouched)
    /// if the index is out of range or the cell is already marked.
    pub fn place(&mut self, index: usize, role: PlayerRole) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Mark(role);
                true
            }
            _ => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

/// Shape of a winning line, used to draw the strike-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// One of the eight fixed winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    pub(crate) const fn new(indices: [usize; 3]) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn kind(&self) -> LineKind {
        let [a, b, c] = self.0;
        if a / SIDE == b / SIDE && b / SIDE == c / SIDE {
            LineKind::Row(a / SIDE)
        } else if a % SIDE == b % SIDE && b % SIDE == c % SIDE {
            LineKind::Column(a % SIDE)
        } else if a == 0 {
            LineKind::Diagonal
        } else {
            LineKind::AntiDiagonal
        }
    }
}
