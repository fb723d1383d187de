//! The Priority Search Engine: one best-first search, three [`Strategies`](Strategy).

mod frontier;
use self::frontier::Frontier;

mod strategy;
pub use self::strategy::{ParseStrategyError, Strategy};

use crate::{
    grid::Grid,
    neighbors::Neighborhood,
    path::{reconstruct_path, Cost, Path},
    Point, PointMap, PointSet,
};

/// The outcome of a single search.
///
/// A search that found no Path but explored at least one Node ran to exhaustion: the goal is
/// unreachable. A search that explored nothing was rejected because of invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    strategy: Strategy,
    path: Option<Path<Point>>,
    explored: Vec<Point>,
}

impl SearchResult {
    fn invalid(strategy: Strategy) -> SearchResult {
        SearchResult {
            strategy,
            path: None,
            explored: vec![],
        }
    }

    /// The Strategy that produced this Result
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The Path from start to goal (both inclusive), if one was found
    pub fn path(&self) -> Option<&Path<Point>> {
        self.path.as_ref()
    }

    /// The number of Nodes taken from the Frontier and finalized
    pub fn nodes_explored(&self) -> usize {
        self.explored.len()
    }

    /// The finalized Nodes in the order they were explored
    pub fn explored(&self) -> &[Point] {
        &self.explored
    }

    /// The number of steps of the Path (its length minus one), or `-1` if there is none
    pub fn path_cost(&self) -> isize {
        self.path.as_ref().map_or(-1, |path| path.cost() as isize)
    }

    /// `true` if a Path was found
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// `true` if the search was rejected without exploring anything
    pub fn is_invalid_input(&self) -> bool {
        self.path.is_none() && self.explored.is_empty()
    }
}

struct SearchState {
    g_cost: PointMap<Cost>,
    parent: PointMap<Option<Point>>,
    closed: PointSet,
    frontier: Frontier,
    explored: Vec<Point>,
}

impl SearchState {
    fn new(size_hint: usize) -> SearchState {
        SearchState {
            g_cost: PointMap::with_capacity(size_hint),
            parent: PointMap::with_capacity(size_hint),
            closed: PointSet::with_capacity(size_hint),
            frontier: Frontier::with_capacity(size_hint / 2),
            explored: Vec::with_capacity(size_hint),
        }
    }

    fn open(&mut self, point: Point, parent: Option<Point>, g: Cost, priority: Cost) {
        self.parent.insert(point, parent);
        self.g_cost.insert(point, g);
        self.frontier.push(priority, point);
    }
}

/// Searches `grid` for a Path from `start` to `goal` on the 4-connected Grid.
///
/// Every step costs `1`, obstacles cannot be entered and the Manhattan distance is used as the
/// Heuristic. See [`search_with`] for the details of the Algorithm.
///
/// ## Examples
/// ```
/// # use grid_search_lab::prelude::*;
/// let grid: Grid = "S..\nX.X\n..E".parse().unwrap();
///
/// let a_star = search(&grid, grid.start(), grid.goal(), Strategy::AStar);
/// let dijkstra = search(&grid, grid.start(), grid.goal(), Strategy::Dijkstra);
///
/// assert_eq!(a_star.path_cost(), 4);
/// assert_eq!(a_star.path_cost(), dijkstra.path_cost());
/// assert!(a_star.nodes_explored() <= dijkstra.nodes_explored());
/// ```
///
/// Starting on the goal finds a Path of a single Point:
/// ```
/// # use grid_search_lab::prelude::*;
/// # let grid: Grid = "S..\nX.X\n..E".parse().unwrap();
/// let result = search(&grid, grid.goal(), grid.goal(), Strategy::Greedy);
///
/// assert_eq!(result.path().unwrap().points(), &[grid.goal()]);
/// assert_eq!(result.path_cost(), 0);
/// assert_eq!(result.nodes_explored(), 1);
/// ```
///
/// A start or goal outside of the Grid is rejected without exploring anything:
/// ```
/// # use grid_search_lab::prelude::*;
/// # let grid: Grid = "S..\nX.X\n..E".parse().unwrap();
/// let result = search(&grid, grid.start(), (10, 10), Strategy::AStar);
///
/// assert!(result.is_invalid_input());
/// assert_eq!(result.nodes_explored(), 0);
/// ```
pub fn search(grid: &Grid, start: Point, goal: Point, strategy: Strategy) -> SearchResult {
    search_with(&grid.neighborhood(), grid, start, goal, strategy)
}

/// Searches `grid` for a Path from `start` to `goal`, moving according to `neighborhood`.
///
/// ## Algorithm
/// A best-first search with lazy deletion:
/// 1. The start is opened with Cost `0`.
/// 2. The Frontier entry with the lowest priority (ties: oldest entry first) is taken. If its
///    Point is already closed, the entry is stale and dropped. Otherwise the Point is closed
///    and counted as explored.
/// 3. If the Point is the goal, the Path is reconstructed from the parent links.
/// 4. Otherwise every walkable, not yet closed neighbor whose Cost improves through the current
///    Point gets the current Point as parent and is pushed with the priority that `strategy`
///    assigns to it.
///
/// No Node is ever reopened after it was closed. For Dijkstra and A* this is exact, for
/// Greedy it is part of why the found Path may be longer than necessary.
///
/// ## Returns
/// A [`SearchResult`] with the Path (if any) and the explored Nodes. If `start` or `goal` are
/// outside of the Grid, or `start` is an obstacle, nothing is explored.
pub fn search_with<N: Neighborhood>(
    neighborhood: &N,
    grid: &Grid,
    start: Point,
    goal: Point,
    strategy: Strategy,
) -> SearchResult {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        log::warn!(
            "{}: start {:?} or goal {:?} is outside the {}x{} grid",
            strategy,
            start,
            goal,
            grid.height(),
            grid.width()
        );
        return SearchResult::invalid(strategy);
    }
    if grid.is_obstacle(start) {
        log::warn!("{}: start {:?} is an obstacle", strategy, start);
        return SearchResult::invalid(strategy);
    }
    log::debug!("{}: searching {:?} -> {:?}", strategy, start, goal);

    let heuristic = |point: Point| {
        if strategy.uses_heuristic() {
            neighborhood.heuristic(point, goal)
        } else {
            0
        }
    };

    let mut state = SearchState::new(grid.width() * grid.height());
    state.open(start, None, 0, strategy.priority(0, heuristic(start)));

    let mut all_neighbors = Vec::with_capacity(4);

    while let Some(current) = state.frontier.pop() {
        if !state.closed.insert(current) {
            continue;
        }
        state.explored.push(current);
        log::trace!("{}: exploring {:?}", strategy, current);

        if current == goal {
            let path = reconstruct_path(&state.parent, goal);
            log::debug!(
                "{}: found a path with cost {:?} after {} nodes",
                strategy,
                path.as_ref().map(Path::cost),
                state.explored.len()
            );
            return SearchResult {
                strategy,
                path,
                explored: state.explored,
            };
        }

        let other_cost = state.g_cost[&current] + 1;

        all_neighbors.clear();
        neighborhood.get_all_neighbors(current, &mut all_neighbors);
        for &other in all_neighbors.iter() {
            if !grid.is_walkable(other) || state.closed.contains(&other) {
                continue;
            }
            let improves = state
                .g_cost
                .get(&other)
                .map_or(true, |&prev_cost| other_cost < prev_cost);
            if improves {
                let priority = strategy.priority(other_cost, heuristic(other));
                state.open(other, Some(current), other_cost, priority);
            }
        }
    }

    log::debug!(
        "{}: no path after {} nodes ({} entries left)",
        strategy,
        state.explored.len(),
        state.frontier.len()
    );
    SearchResult {
        strategy,
        path: None,
        explored: state.explored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::parse(&rows.join("\n")).unwrap()
    }

    #[test]
    fn basic_scenario() {
        let grid = grid(&["S..", "X.X", "..E"]);

        let a_star = search(&grid, grid.start(), grid.goal(), Strategy::AStar);
        let path = a_star.path().unwrap();
        assert_eq!(path.points(), &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]);
        assert_eq!(path.cost(), 4);
        assert_eq!(a_star.path_cost(), 4);

        let dijkstra = search(&grid, grid.start(), grid.goal(), Strategy::Dijkstra);
        assert_eq!(dijkstra.path_cost(), 4);
        assert!(a_star.nodes_explored() <= dijkstra.nodes_explored());
    }

    #[test]
    fn exploration_order() {
        let grid = grid(&["S..", "X.X", "..E"]);

        let result = search(&grid, grid.start(), grid.goal(), Strategy::AStar);
        assert_eq!(
            result.explored(),
            &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn start_is_goal() {
        let grid = grid(&["S.E"]);
        for strategy in Strategy::ALL {
            let result = search(&grid, (0, 1), (0, 1), strategy);
            assert_eq!(result.path().unwrap().points(), &[(0, 1)]);
            assert_eq!(result.path_cost(), 0);
            assert_eq!(result.nodes_explored(), 1);
        }
    }

    #[test]
    fn enclosed_start() {
        let grid = grid(&["SX.", "X..", "..E"]);
        for strategy in Strategy::ALL {
            let result = search(&grid, grid.start(), grid.goal(), strategy);
            assert!(!result.found());
            assert!(!result.is_invalid_input());
            assert_eq!(result.nodes_explored(), 1);
            assert_eq!(result.path_cost(), -1);
        }
    }

    #[test]
    fn invalid_input() {
        let grid = grid(&["S.X", "..E"]);

        let outside = search(&grid, (5, 0), grid.goal(), Strategy::Dijkstra);
        assert!(outside.is_invalid_input());

        let on_wall = search(&grid, (0, 2), grid.goal(), Strategy::Dijkstra);
        assert!(on_wall.is_invalid_input());
        assert_eq!(on_wall.path_cost(), -1);
    }

    #[test]
    fn goal_on_obstacle_is_unreachable() {
        let grid = grid(&["S.X", "..E"]);
        let result = search(&grid, grid.start(), (0, 2), Strategy::AStar);
        assert!(!result.found());
        assert_eq!(result.nodes_explored(), 5);
    }

    #[test]
    fn greedy_takes_the_bait() {
        // the corridor points straight at the goal, but only leads there on a detour
        let grid = grid(&[
            "......", //
            ".XXXX.", //
            "S...XE", //
            "XXX.X.", //
            "XXX.X.", //
            "XXX...", //
        ]);
        let greedy = search(&grid, grid.start(), grid.goal(), Strategy::Greedy);
        let a_star = search(&grid, grid.start(), grid.goal(), Strategy::AStar);
        let dijkstra = search(&grid, grid.start(), grid.goal(), Strategy::Dijkstra);

        assert_eq!(greedy.path_cost(), 11);
        assert_eq!(greedy.nodes_explored(), 12);
        assert_eq!(greedy.path().unwrap()[3], (2, 3));

        assert_eq!(a_star.path_cost(), 9);
        assert_eq!(dijkstra.path_cost(), 9);
    }
}
