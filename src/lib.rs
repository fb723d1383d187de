#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to compare classic Pathfinding Strategies on ASCII Grid maps.
//!
//! ## Introduction
//! Dijkstra, A* and Greedy Best-First search are all the same Algorithm with a different rule
//! for ordering the Frontier: Dijkstra orders by the Cost walked so far (`g`), Greedy orders by
//! the estimated Cost to the Goal (`h`) and A* by the sum of both. This crate implements that
//! shared Algorithm once and makes the ordering rule a [`Strategy`](search::Strategy) value,
//! so that the three can be run on the same map and compared by Path length, number of
//! explored Nodes and elapsed time.
//!
//! Grids only allow movement along the 4 cardinal directions and every step costs `1`.
//! Ties in the Frontier are broken by insertion order, which makes every search fully
//! deterministic: the same map and Strategy always explore the same Nodes in the same order.
//!
//! ## Examples
//! Loading a map and finding a Path:
//! ```
//! use grid_search_lab::prelude::*;
//!
//! let grid: Grid = "S..\nX.X\n..E".parse().unwrap();
//!
//! let result = search(&grid, grid.start(), grid.goal(), Strategy::AStar);
//!
//! let path = result.path().unwrap();
//! assert_eq!(path.len(), 5);
//! assert_eq!(path.cost(), 4);
//! assert_eq!(result.nodes_explored(), 6);
//! ```
//!
//! If the Goal cannot be reached, the Result still reports how much of the map was explored:
//! ```
//! # use grid_search_lab::prelude::*;
//! let grid: Grid = "S.X.\n..X.\nXXX.\n...E".parse().unwrap();
//!
//! let result = search(&grid, grid.start(), grid.goal(), Strategy::Dijkstra);
//!
//! assert!(result.path().is_none());
//! assert_eq!(result.path_cost(), -1);
//! assert_eq!(result.nodes_explored(), 4);
//! ```
//!
//! ### Comparing Strategies
//! ```
//! # use grid_search_lab::prelude::*;
//! let grid: Grid = "S...\n.XX.\n...E".parse().unwrap();
//!
//! for report in run_all_strategies(&grid) {
//!     println!("{}", report);
//!     assert_eq!(report.result().path_cost(), 5);
//! }
//! ```

/// A Position on the Grid as `(row, column)`
pub type Point = (usize, usize);

/// A HashMap keyed by [`Point`]
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A HashSet of [`Point`]s
pub type PointSet = hashbrown::HashSet<Point>;

pub mod app;
pub mod config;
pub mod experiment;
pub mod grid;
pub mod neighbors;
pub mod path;
pub mod results;
pub mod search;

/// The most commonly used Types and Functions
pub mod prelude {
    pub use crate::{
        config::LabConfig,
        experiment::{run_all_strategies, run_strategy, RunReport},
        grid::{Cell, Grid, GridError},
        neighbors::{ManhattanNeighborhood, Neighborhood},
        path::Path,
        search::{search, SearchResult, Strategy},
        Point,
    };
}
