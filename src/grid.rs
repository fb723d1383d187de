//! The Grid Model: an immutable map loaded from ASCII text.
//!
//! ## Map Format
//! One row per line, every row the same length after trimming whitespace:
//! - `X`: an obstacle
//! - `S`: the start (exactly one)
//! - `E`: the goal (exactly one)
//! - anything else: free space (conventionally `.`)
//!
//! ```
//! use grid_search_lab::grid::{Cell, Grid};
//!
//! let grid: Grid = "S..\nX.X\n..E".parse().unwrap();
//!
//! assert_eq!(grid.dimensions(), (3, 3));
//! assert_eq!(grid.start(), (0, 0));
//! assert_eq!(grid.goal(), (2, 2));
//! assert_eq!(grid.get((1, 0)), Some(Cell::Obstacle));
//! assert!(grid.is_obstacle((1, 2)));
//! assert!(!grid.in_bounds((3, 0)));
//! ```

use crate::{neighbors::ManhattanNeighborhood, Point};
use std::fmt;
use std::path::{Path as FsPath, PathBuf};
use std::str::FromStr;

/// The content of a single Tile of the [`Grid`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// walkable Tile
    Free,
    /// solid Tile that no Path may cross
    Obstacle,
    /// the (walkable) Tile the search starts from
    Start,
    /// the (walkable) Tile the search is looking for
    Goal,
}

impl Cell {
    /// Interprets a map character. Every unknown character is free space.
    pub fn from_char(c: char) -> Cell {
        match c {
            'X' => Cell::Obstacle,
            'S' => Cell::Start,
            'E' => Cell::Goal,
            _ => Cell::Free,
        }
    }

    /// The canonical map character of this Cell
    pub fn to_char(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Obstacle => 'X',
            Cell::Start => 'S',
            Cell::Goal => 'E',
        }
    }

    /// `true` for every Cell except [`Cell::Obstacle`]
    pub fn is_walkable(self) -> bool {
        self != Cell::Obstacle
    }
}

/// Reasons why a map could not be turned into a [`Grid`]
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// the map file could not be read
    #[error("could not read map file '{}': {source}", .path.display())]
    Io {
        /// the file that was requested
        path: PathBuf,
        /// the underlying error
        source: std::io::Error,
    },
    /// the map contains no rows
    #[error("the map is empty")]
    Empty,
    /// a row has a different length than the first row
    #[error("row {row} has length {found}, but the map is {expected} columns wide")]
    InconsistentRowLength {
        /// the index of the offending row
        row: usize,
        /// the length of the first row
        expected: usize,
        /// the length of the offending row
        found: usize,
    },
    /// there is no `S` on the map
    #[error("the map has no start ('S')")]
    MissingStart,
    /// there is no `E` on the map
    #[error("the map has no goal ('E')")]
    MissingGoal,
    /// `S` or `E` appears more than once
    #[error("'{}' appears more than once: at {first:?} and at {second:?}", .marker.to_char())]
    DuplicateMarker {
        /// either [`Cell::Start`] or [`Cell::Goal`]
        marker: Cell,
        /// the first occurrence
        first: Point,
        /// the second occurrence
        second: Point,
    },
}

/// An immutable rectangular map with exactly one start and one goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Parses a map from text. See the [module documentation](self) for the format.
    ///
    /// Trailing blank lines are ignored, a blank line between two rows counts as a row of
    /// length 0.
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let mut rows: Vec<&str> = text.lines().map(str::trim).collect();
        while rows.last().map_or(false, |row| row.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(GridError::Empty);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut goal = None;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentRowLength {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::from_char(c);
                let marker = match cell {
                    Cell::Start => Some(&mut start),
                    Cell::Goal => Some(&mut goal),
                    _ => None,
                };
                if let Some(slot) = marker {
                    if let Some(first) = *slot {
                        return Err(GridError::DuplicateMarker {
                            marker: cell,
                            first,
                            second: (row, col),
                        });
                    }
                    *slot = Some((row, col));
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;

        Ok(Grid {
            cells,
            width,
            height,
            start,
            goal,
        })
    }

    /// Reads and parses the map file at `path`.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Grid, GridError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Grid::parse(&text)?;
        log::info!(
            "loaded map '{}' ({}x{})",
            path.display(),
            grid.height,
            grid.width
        );
        Ok(grid)
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// The Position of `S`
    pub fn start(&self) -> Point {
        self.start
    }

    /// The Position of `E`
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// `true` if `point` lies on the Grid
    pub fn in_bounds(&self, (row, col): Point) -> bool {
        row < self.height && col < self.width
    }

    /// The Cell at `point`, or `None` if it is out of bounds
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.index(point).map(|index| self.cells[index])
    }

    /// `true` if `point` is an obstacle. Out of bounds Points are not obstacles.
    pub fn is_obstacle(&self, point: Point) -> bool {
        self.get(point) == Some(Cell::Obstacle)
    }

    /// `true` if `point` is on the Grid and not an obstacle
    pub fn is_walkable(&self, point: Point) -> bool {
        self.get(point).map_or(false, Cell::is_walkable)
    }

    /// The 4-connected Neighborhood matching the size of this Grid
    pub fn neighborhood(&self) -> ManhattanNeighborhood {
        ManhattanNeighborhood::new(self.width, self.height)
    }

    /// Iterates over the rows from top to bottom
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }

    /// Renders the Grid as text, marking the inner Points of `path` with `*`.
    ///
    /// ```
    /// # use grid_search_lab::grid::Grid;
    /// let grid: Grid = "S..\nX.X\n..E".parse().unwrap();
    /// let path = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)];
    ///
    /// assert_eq!(grid.render_path(&path), "S*.\nX*X\n.*E\n");
    /// ```
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut chars: Vec<char> = self.cells.iter().map(|cell| cell.to_char()).collect();
        if path.len() > 2 {
            for &point in &path[1..path.len() - 1] {
                if let Some(index) = self.index(point) {
                    chars[index] = '*';
                }
            }
        }
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in chars.chunks(self.width) {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    fn index(&self, point: Point) -> Option<usize> {
        if !self.in_bounds(point) {
            return None;
        }
        Some(point.0 * self.width + point.1)
    }
}

impl FromStr for Grid {
    type Err = GridError;
    fn from_str(s: &str) -> Result<Grid, GridError> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}
