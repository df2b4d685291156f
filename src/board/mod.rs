//! Board representation for Fanorona

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, BoardError};

/// Board height (5 rows of intersections)
pub const ROWS: usize = 5;
/// Board width (9 columns of intersections)
pub const COLS: usize = 9;
pub const TOTAL_CELLS: usize = ROWS * COLS; // 45

/// The two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::White => "White",
            Player::Black => "Black",
        }
    }
}

/// Occupancy of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Black,
    #[default]
    Empty,
    White,
}

impl Cell {
    /// Canonical numeric value: Black = -1, Empty = 0, White = +1
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Cell::Black => -1,
            Cell::Empty => 0,
            Cell::White => 1,
        }
    }

    #[inline]
    pub fn from_value(value: i8) -> Option<Cell> {
        match value {
            -1 => Some(Cell::Black),
            0 => Some(Cell::Empty),
            1 => Some(Cell::White),
            _ => None,
        }
    }

    /// Owner of the piece on this cell, if any
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
            Cell::Empty => None,
        }
    }

    #[inline]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner() == Some(player)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        match player {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }
}

/// Position on the board.
///
/// Coordinates are signed so requests coming from outside can name
/// off-board points; use [`Pos::is_valid`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.row >= 0 && self.row < ROWS as i32 && self.col >= 0 && self.col < COLS as i32
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / COLS) as i32,
            col: (idx % COLS) as i32,
        }
    }

    /// Position one unit step away in direction `(dr, dc)`
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Pos {
        Pos::new(self.row + dr, self.col + dc)
    }

    /// Iterate over every position on the board, row-major
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
