//! Neighborhoods: how a Path can move along the Grid, and how far away a Goal is estimated to be.

use crate::Point;
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// It provides a function to query all neighboring Points of an existing Point and a Heuristic
/// for how long it might take to reach a goal from a Point.
///
/// The search engine pushes neighbors into the Frontier in exactly the order they are returned,
/// so the order is part of the contract: it decides which of several equally good Nodes is
/// explored first.
pub trait Neighborhood: Clone + Debug {
    /// Provides a list of Neighbors of a Point
    ///
    /// Note that it is not necessary to check weather the Tile at a Point is solid or not.
    /// That check is done later.
    ///
    /// `target` is cleared by the caller and the neighbors should be pushed into it.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
    /// Gives a Heuristic for how long it takes to reach `goal` from `point`.
    ///
    /// This is usually the Distance between the two Points in the Metric of your Neighborhood.
    /// It must never overestimate the actual Cost, otherwise A* loses its optimality.
    fn heuristic(&self, point: Point, goal: Point) -> usize;
}

/// The Manhattan distance `|a.row - b.row| + |a.col - b.col|`.
///
/// ```
/// # use grid_search_lab::neighbors::manhattan_distance;
/// assert_eq!(manhattan_distance((3, 1), (0, 4)), 6);
/// assert_eq!(manhattan_distance((2, 2), (2, 2)), 0);
/// ```
pub fn manhattan_distance(a: Point, b: Point) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```text
/// A: Agent, 1-4: reachable in one step, in the order they are returned
///   4
///   |
/// 2-A-1
///   |
///   3
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ManhattanNeighborhood {
    width: usize,
    height: usize,
}

impl ManhattanNeighborhood {
    /// Creates a new ManhattanNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { width, height }
    }
}

const STEPS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let (width, height) = (self.width, self.height);

        let iter = STEPS
            .iter()
            .filter_map(|&(dr, dc)| {
                Some((
                    point.0.checked_add_signed(dr)?,
                    point.1.checked_add_signed(dc)?,
                ))
            })
            .filter(|&(row, col)| row < height && col < width);

        target.extend(iter);
    }
    fn heuristic(&self, point: Point, goal: Point) -> usize {
        manhattan_distance(point, goal)
    }
}
