use docopt::Docopt;
use error_chain::bail;
use kruskal_mazes::{
    generators,
    maze::Maze,
    shuffle,
    units::Dimension,
};
use serde_derive::Deserialize;

const USAGE: &str = "Kruskal mazes

Usage:
    kruskal_mazes_driver -h | --help
    kruskal_mazes_driver [--dimension=<n>] [--seed=<s>] [--events] [--quiet]

Options:
    -h --help          Show this screen.
    --dimension=<n>    Rows and columns of the square maze [default: 10].
    --seed=<s>         Seed the random number generator for a reproducible maze.
    --events           Print every removed wall in carving order.
    --quiet            Skip the textual rendering of the finished maze.
";

// The carving core accepts any dimension >= 1; these are the bounds this
// driver imposes so the rendering stays a sane size.
const MIN_DIMENSION: usize = 7;
const MAX_DIMENSION: usize = 50;

#[derive(Debug, Deserialize)]
struct DriverArgs {
    flag_dimension: usize,
    flag_seed: Option<u64>,
    flag_events: bool,
    flag_quiet: bool,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Generation(::kruskal_mazes::generators::GenerationError);
            WallLink(::kruskal_mazes::maze::WallLinkError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: DriverArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let dimension = args.flag_dimension;
    if dimension < MIN_DIMENSION || dimension > MAX_DIMENSION {
        bail!("please pick a dimension between {} and {}, inclusive",
              MIN_DIMENSION,
              MAX_DIMENSION);
    }

    let removed_walls = match args.flag_seed {
        Some(seed) => {
            let mut rng = shuffle::seeded_rng(seed);
            generators::kruskal(Dimension(dimension), Some(&mut rng))?
        }
        None => generators::kruskal(Dimension(dimension), None)?,
    };

    if args.flag_events {
        for wall in &removed_walls {
            println!("{}", wall);
        }
    }

    if !args.flag_quiet {
        let maze = Maze::from_walls(Dimension(dimension), &removed_walls)?;
        print!("{}", maze);
    }

    Ok(())
}
