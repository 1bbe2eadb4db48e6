pub mod error;
pub mod maze;
pub mod parser;

pub use error::MazeError;
pub use maze::{Maze, Symbols, VisitedMask, DIRECTIONS, PATH, WALL};

use miette::Context;
use tracing::info;

/// Parses a maze description and returns its number of path regions.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn process(input: &str, symbols: Symbols) -> miette::Result<String> {
    let maze = parser::parse_maze(input, symbols).context("Failed to parse maze input")?;
    let count = maze.count_components();
    info!(count, "counted path components");
    Ok(count.to_string())
}
