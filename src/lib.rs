//! **kruskal-mazes** carves perfect mazes with a randomised variant of Kruskal's
//! minimum spanning tree algorithm.
//!
//! The core is deliberately render-free: [`generators::kruskal`] returns the
//! ordered sequence of removed walls and nothing else. Animation, console
//! prompting and any other presentation concern sit on the far side of that
//! event stream (see [`maze::Maze`] and the driver binary for one such
//! consumer).

pub mod cells;
pub mod connectivity;
pub mod generators;
pub mod grid;
pub mod maze;
pub mod shuffle;
pub mod units;
pub mod walls;
mod utils;
