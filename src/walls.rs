use crate::cells::Cell;
use std::fmt;

/// The barrier between two grid-adjacent cells. Removing a wall carves a
/// passage.
///
/// A wall is an unordered pair: the constructor stores the endpoints in
/// `(row, col)` order, so the derived `Eq`/`Hash`/`Ord` never depend on the
/// order the endpoints were supplied in.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Wall {
    one: Cell,
    two: Cell,
}

impl Wall {
    pub fn new(a: Cell, b: Cell) -> Wall {
        if a <= b {
            Wall { one: a, two: b }
        } else {
            Wall { one: b, two: a }
        }
    }

    pub fn one(&self) -> Cell {
        self.one
    }

    pub fn two(&self) -> Cell {
        self.two
    }

    /// True iff the endpoints differ by exactly one unit in exactly one axis.
    /// Walls between non-adjacent cells never appear in a grid's enumeration,
    /// but the event stream consumers can use this as a sanity check.
    pub fn is_grid_adjacency(&self) -> bool {
        let row_gap = absolute_difference(self.one.row, self.two.row);
        let col_gap = absolute_difference(self.one.col, self.two.col);
        row_gap + col_gap == 1
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <-> {}", self.one, self.two)
    }
}

fn absolute_difference(a: usize, b: usize) -> usize {
    if a > b { a - b } else { b - a }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn equality_ignores_endpoint_order() {
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 1);
        assert_eq!(Wall::new(a, b), Wall::new(b, a));
    }

    #[test]
    fn endpoints_are_normalised() {
        let a = Cell::new(3, 0);
        let b = Cell::new(2, 0);
        let wall = Wall::new(a, b);
        assert_eq!(wall.one(), b);
        assert_eq!(wall.two(), a);
    }

    #[test]
    fn grid_adjacency() {
        let origin = Cell::new(1, 1);
        assert!(Wall::new(origin, origin.south()).is_grid_adjacency());
        assert!(Wall::new(origin, origin.east()).is_grid_adjacency());
        // diagonal
        assert!(!Wall::new(origin, Cell::new(2, 2)).is_grid_adjacency());
        // same cell
        assert!(!Wall::new(origin, origin).is_grid_adjacency());
        // two steps away
        assert!(!Wall::new(origin, Cell::new(1, 3)).is_grid_adjacency());
    }

    #[test]
    fn display_form() {
        let wall = Wall::new(Cell::new(0, 1), Cell::new(0, 0));
        assert_eq!(format!("{}", wall), "(0, 0) <-> (0, 1)");
    }
}
