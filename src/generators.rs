use crate::connectivity::ComponentTracker;
use crate::grid::Grid;
use crate::shuffle;
use crate::units::Dimension;
use crate::walls::Wall;

use rand::{self, Rng, XorShiftRng};
use std::error::Error;
use std::fmt;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GenerationError {
    InvalidDimension,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GenerationError::InvalidDimension => {
                write!(f, "maze dimension must be at least 1")
            }
        }
    }
}

impl Error for GenerationError {
    fn description(&self) -> &str {
        "maze dimension must be at least 1"
    }
}

/// Receives each removed wall in emission order. The seam between the carving
/// core and whatever animates, draws or records the maze.
pub trait WallSink {
    fn wall_removed(&mut self, wall: Wall);
}

impl WallSink for Vec<Wall> {
    fn wall_removed(&mut self, wall: Wall) {
        self.push(wall);
    }
}

/// Carve a perfect maze of `dimension` x `dimension` cells, returning the
/// removed walls in carving order.
///
/// Pass `None` for a randomly seeded rng, or thread one through (for example
/// from [`shuffle::seeded_rng`]) for a reproducible maze.
pub fn kruskal(dimension: Dimension,
               rng: Option<&mut XorShiftRng>)
               -> Result<Vec<Wall>, GenerationError> {
    let mut removed_walls = Vec::new();
    match rng {
        Some(rng) => kruskal_into(dimension, rng, &mut removed_walls)?,
        None => {
            let mut rng = rand::weak_rng();
            kruskal_into(dimension, &mut rng, &mut removed_walls)?
        }
    }
    Ok(removed_walls)
}

/// The randomised Kruskal variant: enumerate every wall of the grid, shuffle
/// them uniformly, then walk the shuffled sequence once. A wall whose cells
/// are already connected would close a cycle and is left standing; any other
/// wall is removed and its cells merged.
///
/// Exactly N*N - 1 walls reach the sink: each removal performs one merge, and
/// that many merges turn N*N singleton chambers into a single spanning
/// chamber. The accepted walls therefore form a spanning tree - a perfect
/// maze.
pub fn kruskal_into<R, S>(dimension: Dimension,
                          rng: &mut R,
                          sink: &mut S)
                          -> Result<(), GenerationError>
    where R: Rng,
          S: WallSink
{
    if dimension.0 == 0 {
        return Err(GenerationError::InvalidDimension);
    }

    let grid = Grid::new(dimension);
    let shuffled_walls = shuffle::shuffle(rng, grid.walls().collect());

    let mut tracker = ComponentTracker::new(&grid);
    for wall in shuffled_walls {
        let (a, b) = (wall.one(), wall.two());
        if !tracker.connected(a, b) {
            tracker.union(a, b);
            sink.wall_removed(wall);
        }
    }

    Ok(())
}
