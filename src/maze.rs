use crate::cells::{Cell, CellSmallVec};
use crate::units::Dimension;
use crate::walls::Wall;

use petgraph::algo;
use petgraph::graph;
use petgraph::{Graph, Undirected};
use std::error;
use std::fmt;

/// A carved maze: the passage graph built from a wall-removal sequence.
///
/// The carving core never needs one of these - it only emits walls. `Maze` is
/// the consumer side: it answers passage queries for rendering and gives an
/// independent structural check over the emitted edges alone.
pub struct Maze {
    graph: Graph<(), (), Undirected, u32>,
    dimension: Dimension,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallLinkError {
    InvalidCell,
    NotAnAdjacency,
}

impl fmt::Display for WallLinkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WallLinkError::InvalidCell => {
                write!(f, "wall endpoint lies outside the maze")
            }
            WallLinkError::NotAnAdjacency => {
                write!(f, "wall endpoints are not grid-adjacent cells")
            }
        }
    }
}

impl error::Error for WallLinkError {
    fn description(&self) -> &str {
        match *self {
            WallLinkError::InvalidCell => "wall endpoint lies outside the maze",
            WallLinkError::NotAnAdjacency => "wall endpoints are not grid-adjacent cells",
        }
    }
}

impl Maze {
    /// A maze of `dimension` x `dimension` cells with no passages carved yet.
    pub fn new(dimension: Dimension) -> Maze {
        let cells_count = dimension.0 * dimension.0;
        let passages_hint = if cells_count == 0 { 0 } else { cells_count - 1 };

        let mut maze = Maze {
            graph: Graph::with_capacity(cells_count, passages_hint),
            dimension: dimension,
        };
        for _ in 0..cells_count {
            let _ = maze.graph.add_node(());
        }

        maze
    }

    /// Replay a wall-removal sequence into a passage graph.
    pub fn from_walls(dimension: Dimension, removed_walls: &[Wall]) -> Result<Maze, WallLinkError> {
        let mut maze = Maze::new(dimension);
        for wall in removed_walls {
            maze.link(*wall)?;
        }
        Ok(maze)
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Carve the passage where `wall` stood.
    pub fn link(&mut self, wall: Wall) -> Result<(), WallLinkError> {
        if !wall.is_grid_adjacency() {
            return Err(WallLinkError::NotAnAdjacency);
        }
        match (self.node_index(wall.one()), self.node_index(wall.two())) {
            (Some(a_index), Some(b_index)) => {
                let _ = self.graph.update_edge(a_index, b_index, ());
                Ok(())
            }
            _ => Err(WallLinkError::InvalidCell),
        }
    }

    /// Is there a passage directly between two cells?
    pub fn is_linked(&self, a: Cell, b: Cell) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(a_index), Some(b_index)) => {
                self.graph.find_edge(a_index, b_index).is_some()
            }
            _ => false,
        }
    }

    /// Cells reachable from `cell` through one passage.
    pub fn links(&self, cell: Cell) -> CellSmallVec {
        match self.node_index(cell) {
            Some(cell_index) => {
                self.graph
                    .neighbors(cell_index)
                    .map(|node_index| self.index_to_cell(node_index))
                    .collect()
            }
            None => CellSmallVec::new(),
        }
    }

    #[inline]
    pub fn passages_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// A perfect maze is a spanning tree of the grid: one connected component
    /// and no cycles, so exactly one route between any two cells.
    pub fn is_perfect(&self) -> bool {
        algo::connected_components(&self.graph) == 1 &&
        !algo::is_cyclic_undirected(&self.graph)
    }

    fn node_index(&self, cell: Cell) -> Option<graph::NodeIndex<u32>> {
        let d = self.dimension.0;
        if cell.row < d && cell.col < d {
            Some(graph::NodeIndex::new(cell.row * d + cell.col))
        } else {
            None
        }
    }

    fn index_to_cell(&self, node_index: graph::NodeIndex<u32>) -> Cell {
        let d = self.dimension.0;
        let raw = node_index.index();
        Cell::new(raw / d, raw % d)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        const CORNER: &'static str = "+";
        const WALL_HORIZONTAL: &'static str = "---";
        const PASSAGE_HORIZONTAL: &'static str = "   ";
        const WALL_VERTICAL: &'static str = "|";
        const PASSAGE_VERTICAL: &'static str = " ";
        const BODY: &'static str = "   ";

        let d = self.dimension.0;

        // north border
        let mut output = String::from(CORNER);
        for _ in 0..d {
            output.push_str(WALL_HORIZONTAL);
            output.push_str(CORNER);
        }
        output.push('\n');

        // every cell renders its body, east boundary and south boundary; the
        // north boundary is the previous row's south.
        for row in 0..d {
            let mut middle_section = String::from(WALL_VERTICAL);
            let mut bottom_section = String::from(CORNER);

            for col in 0..d {
                let cell = Cell::new(row, col);
                let east_open = self.is_linked(cell, cell.east());
                let south_open = self.is_linked(cell, cell.south());

                middle_section.push_str(BODY);
                middle_section.push_str(if east_open {
                    PASSAGE_VERTICAL
                } else {
                    WALL_VERTICAL
                });

                bottom_section.push_str(if south_open {
                    PASSAGE_HORIZONTAL
                } else {
                    WALL_HORIZONTAL
                });
                bottom_section.push_str(CORNER);
            }

            output.push_str(&middle_section);
            output.push('\n');
            output.push_str(&bottom_section);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}
