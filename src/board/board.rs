//! Board structure: the 5x9 occupancy grid

use thiserror::Error;

use super::{Cell, Player, Pos, COLS, ROWS};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("position {0} is off the board")]
    OutOfBounds(Pos),
    #[error("invalid cell value {0}, expected -1, 0 or 1")]
    InvalidCellValue(i8),
}

/// Canonical opening position (Black = -1 on top, White = +1 below)
const OPENING: [[i8; COLS]; ROWS] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, 1, -1, 1, 0, -1, 1, -1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Canonical opening position: two back rows per side, the middle row
    /// alternating, centre point empty.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, values) in OPENING.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = Cell::from_value(value).unwrap_or_default();
            }
        }
        Self { cells }
    }

    /// Board with no pieces on it
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from canonical -1/0/+1 values
    pub fn from_values(values: [[i8; COLS]; ROWS]) -> Result<Self, BoardError> {
        let mut board = Self::empty();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                board.cells[row][col] =
                    Cell::from_value(value).ok_or(BoardError::InvalidCellValue(value))?;
            }
        }
        Ok(board)
    }

    /// Canonical -1/0/+1 values of every cell
    pub fn to_values(&self) -> [[i8; COLS]; ROWS] {
        let mut values = [[0; COLS]; ROWS];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                values[row][col] = cell.value();
            }
        }
        values
    }

    #[inline]
    pub fn is_valid(&self, pos: Pos) -> bool {
        pos.is_valid()
    }

    /// Get occupant at position
    #[inline]
    pub fn occupant(&self, pos: Pos) -> Result<Cell, BoardError> {
        if !pos.is_valid() {
            return Err(BoardError::OutOfBounds(pos));
        }
        Ok(self.cells[pos.row as usize][pos.col as usize])
    }

    /// Occupant at position, treating off-board points as empty
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.occupant(pos).unwrap_or(Cell::Empty)
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.occupant(pos) == Ok(Cell::Empty)
    }

    /// Set a cell. Only the game state machine mutates a live board;
    /// positions are already validated by the caller.
    #[inline]
    pub(crate) fn place(&mut self, pos: Pos, cell: Cell) {
        if pos.is_valid() {
            self.cells[pos.row as usize][pos.col as usize] = cell;
        }
    }

    /// Remove every piece at the given positions
    pub(crate) fn remove_all(&mut self, positions: &[Pos]) {
        for &pos in positions {
            self.place(pos, Cell::Empty);
        }
    }

    /// Piece counts as `(white, black)`
    pub fn count_pieces(&self) -> (u32, u32) {
        let mut white = 0;
        let mut black = 0;
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::White => white += 1,
                Cell::Black => black += 1,
                Cell::Empty => {}
            }
        }
        (white, black)
    }

    /// Positions currently holding a piece of `player`
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.get(pos).is_owned_by(player))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.to_values() {
            let row: Vec<String> = line.iter().map(|v| format!("{:>2}", v)).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
