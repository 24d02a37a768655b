use smallvec::SmallVec;
use std::fmt;

/// One grid position. Equality, hashing and ordering are all by `(row, col)`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// A cell has at most 4 neighbours, so neighbour lists live on the stack.
pub type CellSmallVec = SmallVec<[Cell; 4]>;

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell { row: row, col: col }
    }

    /// The coordinate one row below. Not bounds checked - the grid decides
    /// whether the result is a real cell.
    pub fn south(&self) -> Cell {
        Cell::new(self.row + 1, self.col)
    }

    /// The coordinate one column to the right. Not bounds checked.
    pub fn east(&self) -> Cell {
        Cell::new(self.row, self.col + 1)
    }
}

impl From<(usize, usize)> for Cell {
    fn from(row_col_pair: (usize, usize)) -> Cell {
        Cell::new(row_col_pair.0, row_col_pair.1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
