use std::fmt;

use itertools::iproduct;
use tracing::debug;

pub const WALL: char = '#';
pub const PATH: char = '.';

/// Up, down, left, right as `(row, column)` offsets.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The two characters that give a maze cell its meaning. Anything else in the
/// grid is inert: never visited, never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbols {
    pub wall: char,
    pub path: char,
}

impl Symbols {
    pub fn new(wall: char, path: char) -> Self {
        Self { wall, path }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new(WALL, PATH)
    }
}

/// Tracks which path cells already belong to a discovered region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMask {
    cells: Vec<Vec<bool>>,
    rows: usize,
    cols: usize,
}

impl VisitedMask {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![false; cols]; rows],
            rows,
            cols,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Out-of-range cells read as unvisited.
    pub fn is_visited(&self, i: usize, j: usize) -> bool {
        self.cells
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    /// Marks a cell, returning `true` if it was not already marked.
    pub fn mark(&mut self, i: usize, j: usize) -> bool {
        match self.cells.get_mut(i).and_then(|row| row.get_mut(j)) {
            Some(cell) if !*cell => {
                *cell = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v).count()
    }
}

/// An immutable character grid with designated wall and path symbols.
///
/// The grid is expected to be rectangular; the column count is taken from the
/// first row and cells beyond a shorter row are treated as non-path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Vec<Vec<char>>,
    rows: usize,
    cols: usize,
    symbols: Symbols,
}

impl Maze {
    pub fn new(grid: Vec<Vec<char>>, wall: char, path: char) -> Self {
        Self::with_symbols(grid, Symbols::new(wall, path))
    }

    pub fn with_symbols(grid: Vec<Vec<char>>, symbols: Symbols) -> Self {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        Self {
            grid,
            rows,
            cols,
            symbols,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn symbols(&self) -> Symbols {
        self.symbols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<char> {
        self.grid.get(i).and_then(|row| row.get(j)).copied()
    }

    pub fn is_inside_grid(&self, i: isize, j: isize) -> bool {
        0 <= i && (i as usize) < self.rows && 0 <= j && (j as usize) < self.cols
    }

    fn is_path(&self, i: usize, j: usize) -> bool {
        self.get(i, j) == Some(self.symbols.path)
    }

    fn neighbors(&self, i: usize, j: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        DIRECTIONS.iter().filter_map(move |&(di, dj)| {
            let ni = i as isize + di;
            let nj = j as isize + dj;
            self.is_inside_grid(ni, nj).then(|| (ni as usize, nj as usize))
        })
    }

    /// Marks every path cell reachable from `(i, j)` through other path cells.
    ///
    /// The starting cell is expected to be marked already. Uses an explicit
    /// stack, so region size is bounded by memory rather than call depth.
    pub fn flood_fill(&self, i: usize, j: usize, visited: &mut VisitedMask) {
        debug_assert_eq!(visited.dimensions(), self.dimensions());

        let mut stack = vec![(i, j)];

        while let Some((i, j)) = stack.pop() {
            for (ni, nj) in self.neighbors(i, j) {
                if !self.is_path(ni, nj) || !visited.mark(ni, nj) {
                    continue;
                }
                stack.push((ni, nj));
            }
        }
    }

    /// Number of 4-connected regions of path cells.
    #[tracing::instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn count_components(&self) -> usize {
        let mut visited = VisitedMask::new(self.rows, self.cols);
        let mut count = 0;

        for (i, j) in iproduct!(0..self.rows, 0..self.cols) {
            if visited.is_visited(i, j) || !self.is_path(i, j) {
                continue;
            }

            visited.mark(i, j);
            self.flood_fill(i, j, &mut visited);
            count += 1;
            debug!(region = count, row = i, col = j, "discovered region");
        }

        count
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
