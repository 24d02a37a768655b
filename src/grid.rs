use crate::cells::{Cell, CellSmallVec};
use crate::units::{CellsCount, Dimension, WallsCount};
use crate::walls::Wall;

/// An N x N grid of cells before any carving has happened.
///
/// The grid is pure geometry: it enumerates the vertex set (cells) and the
/// edge set (walls) once, and the rest of the crate treats both as read-only.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Grid {
    dimension: Dimension,
}

impl Grid {
    pub fn new(dimension: Dimension) -> Grid {
        Grid { dimension: dimension }
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[inline]
    pub fn size(&self) -> CellsCount {
        CellsCount(self.dimension.0 * self.dimension.0)
    }

    /// Every cell has one wall to its south and east neighbour (when present),
    /// which covers each adjacency exactly once: 2 * N * (N - 1) in total.
    #[inline]
    pub fn walls_count(&self) -> WallsCount {
        let d = self.dimension.0;
        if d == 0 {
            WallsCount(0)
        } else {
            WallsCount(2 * d * (d - 1))
        }
    }

    #[inline]
    pub fn is_valid_cell(&self, cell: Cell) -> bool {
        cell.row < self.dimension.0 && cell.col < self.dimension.0
    }

    /// All cells in row major order.
    pub fn cells(&self) -> CellIter {
        let d = self.dimension.0;
        CellIter {
            current_cell_number: 0,
            dimension: d,
            cells_count: d * d,
        }
    }

    /// All walls, visiting each cell in row major order and producing its
    /// south then east wall where those neighbours exist. No duplicates.
    pub fn walls(&self) -> WallIter {
        WallIter {
            cell_iter: self.cells(),
            pending_east: None,
            remaining: self.walls_count().0,
        }
    }

    /// The in-bounds North, South, East, West neighbours of a cell.
    pub fn neighbours(&self, cell: Cell) -> CellSmallVec {
        let mut adjacent = CellSmallVec::new();
        if cell.row > 0 {
            adjacent.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.col > 0 {
            adjacent.push(Cell::new(cell.row, cell.col - 1));
        }
        if self.is_valid_cell(cell.east()) {
            adjacent.push(cell.east());
        }
        if self.is_valid_cell(cell.south()) {
            adjacent.push(cell.south());
        }
        adjacent
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    dimension: usize,
    cells_count: usize,
}

impl Iterator for CellIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let cell = index_to_cell(self.dimension, self.current_cell_number);
            self.current_cell_number += 1;
            Some(cell)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[derive(Debug, Clone)]
pub struct WallIter {
    cell_iter: CellIter,
    pending_east: Option<Wall>,
    remaining: usize,
}

impl Iterator for WallIter {
    type Item = Wall;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(east_wall) = self.pending_east.take() {
            self.remaining -= 1;
            return Some(east_wall);
        }

        let dimension = self.cell_iter.dimension;
        while let Some(cell) = self.cell_iter.next() {
            let south_wall = if cell.row + 1 < dimension {
                Some(Wall::new(cell, cell.south()))
            } else {
                None
            };
            let east_wall = if cell.col + 1 < dimension {
                Some(Wall::new(cell, cell.east()))
            } else {
                None
            };

            match (south_wall, east_wall) {
                (Some(south), east) => {
                    self.pending_east = east;
                    self.remaining -= 1;
                    return Some(south);
                }
                (None, Some(east)) => {
                    self.remaining -= 1;
                    return Some(east);
                }
                // south east corner cell has neither
                (None, None) => {}
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

fn index_to_cell(dimension: usize, row_major_index: usize) -> Cell {
    let row = row_major_index / dimension;
    let col = row_major_index - (row * dimension);
    Cell::new(row, col)
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools; // a trait

    #[test]
    fn grid_size() {
        assert_eq!(Grid::new(Dimension(10)).size(), CellsCount(100));
        assert_eq!(Grid::new(Dimension(1)).size(), CellsCount(1));
    }

    #[test]
    fn walls_count_is_twice_n_times_n_minus_one() {
        for n in 0..12 {
            let expected = if n == 0 { 0 } else { 2 * n * (n - 1) };
            assert_eq!(Grid::new(Dimension(n)).walls_count(), WallsCount(expected));
        }
    }

    #[test]
    fn cell_iter_is_row_major() {
        let g = Grid::new(Dimension(2));
        assert_eq!(g.cells().collect::<Vec<Cell>>(),
                   &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn cell_iter_size_hint_is_exact() {
        let mut iter = Grid::new(Dimension(3)).cells();
        assert_eq!(iter.size_hint(), (9, Some(9)));
        iter.next();
        assert_eq!(iter.size_hint(), (8, Some(8)));
    }

    #[test]
    fn two_by_two_wall_enumeration() {
        let g = Grid::new(Dimension(2));
        let walls = g.walls().collect::<Vec<Wall>>();
        assert_eq!(walls.len(), 4);

        let expected = [Wall::new(Cell::new(0, 0), Cell::new(1, 0)),
                        Wall::new(Cell::new(0, 0), Cell::new(0, 1)),
                        Wall::new(Cell::new(0, 1), Cell::new(1, 1)),
                        Wall::new(Cell::new(1, 0), Cell::new(1, 1))];
        assert_eq!(walls.iter().cloned().sorted(),
                   expected.iter().cloned().sorted());
    }

    #[test]
    fn wall_enumeration_has_no_duplicates() {
        let g = Grid::new(Dimension(7));
        let walls = g.walls().collect::<Vec<Wall>>();
        assert_eq!(walls.len(), g.walls_count().0);
        assert_eq!(walls.iter().cloned().unique().count(), walls.len());
    }

    #[test]
    fn walls_join_neighbouring_cells() {
        let g = Grid::new(Dimension(5));
        for wall in g.walls() {
            assert!(wall.is_grid_adjacency());
            assert!(g.neighbours(wall.one()).iter().any(|&c| c == wall.two()));
        }
    }

    #[test]
    fn wall_iter_size_hint_is_exact() {
        let mut iter = Grid::new(Dimension(3)).walls();
        assert_eq!(iter.size_hint(), (12, Some(12)));
        iter.next();
        assert_eq!(iter.size_hint(), (11, Some(11)));
    }

    #[test]
    fn single_cell_grid_has_no_walls() {
        let g = Grid::new(Dimension(1));
        assert_eq!(g.walls().count(), 0);
    }

    #[test]
    fn neighbour_cells() {
        let g = Grid::new(Dimension(10));

        let check_expected_neighbours = |cell, expected_neighbours: &[Cell]| {
            let neighbours: Vec<Cell> = g.neighbours(cell).iter().cloned().sorted();
            let expected: Vec<Cell> = expected_neighbours.iter().cloned().sorted();
            assert_eq!(neighbours, expected);
        };
        let c = |row, col| Cell::new(row, col);

        // corners
        check_expected_neighbours(c(0, 0), &[c(0, 1), c(1, 0)]);
        check_expected_neighbours(c(0, 9), &[c(0, 8), c(1, 9)]);
        check_expected_neighbours(c(9, 0), &[c(8, 0), c(9, 1)]);
        check_expected_neighbours(c(9, 9), &[c(8, 9), c(9, 8)]);

        // side element examples
        check_expected_neighbours(c(0, 4), &[c(0, 3), c(0, 5), c(1, 4)]);
        check_expected_neighbours(c(4, 0), &[c(3, 0), c(5, 0), c(4, 1)]);

        // somewhere with 4 neighbours inside the grid
        check_expected_neighbours(c(5, 5), &[c(4, 5), c(6, 5), c(5, 4), c(5, 6)]);
    }
}
