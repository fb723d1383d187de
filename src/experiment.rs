//! Timed runs of one or all [`Strategies`](Strategy) on a Grid.

use crate::{
    grid::Grid,
    search::{search, SearchResult, Strategy},
};

use std::fmt;
use std::time::{Duration, Instant};

/// The Result of a search together with the time it took
#[derive(Clone, Debug)]
pub struct RunReport {
    result: SearchResult,
    elapsed: Duration,
}

impl RunReport {
    /// The Strategy that was run
    pub fn strategy(&self) -> Strategy {
        self.result.strategy()
    }

    /// The Result of the search
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    /// Wall clock time of the search
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = self.strategy().label();
        let secs = self.elapsed.as_secs_f64();
        let nodes = self.result.nodes_explored();
        if self.result.found() {
            write!(
                f,
                "{} OK! Steps: {} Nodes: {} T: {:.4}s",
                label,
                self.result.path_cost(),
                nodes,
                secs
            )
        } else if self.result.is_invalid_input() {
            write!(f, "{} rejected the start or goal", label)
        } else {
            write!(f, "{} found no path. Nodes: {} T: {:.4}s", label, nodes, secs)
        }
    }
}

/// Runs `strategy` from the start to the goal of `grid` and measures the time it takes.
pub fn run_strategy(grid: &Grid, strategy: Strategy) -> RunReport {
    let start_time = Instant::now();
    let result = search(grid, grid.start(), grid.goal(), strategy);
    let elapsed = start_time.elapsed();

    log::info!(
        "{}: cost {} with {} nodes explored in {:.6}s",
        strategy,
        result.path_cost(),
        result.nodes_explored(),
        elapsed.as_secs_f64()
    );
    RunReport { result, elapsed }
}

/// Runs every Strategy in [`Strategy::ALL`] on `grid`.
///
/// With the `parallel` feature the searches run on the rayon thread pool. The reports are
/// always returned in the order of [`Strategy::ALL`].
pub fn run_all_strategies(grid: &Grid) -> Vec<RunReport> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Strategy::ALL
            .par_iter()
            .map(|&strategy| run_strategy(grid, strategy))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        Strategy::ALL
            .iter()
            .map(|&strategy| run_strategy(grid, strategy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_strategies_in_order() {
        let grid = Grid::parse("S...\n.XX.\n...E").unwrap();
        let reports = run_all_strategies(&grid);

        let strategies: Vec<Strategy> = reports.iter().map(RunReport::strategy).collect();
        assert_eq!(strategies, Strategy::ALL);
        for report in &reports {
            assert_eq!(report.result().path_cost(), 5);
        }
    }

    #[test]
    fn display() {
        let grid = Grid::parse("S.\nXE").unwrap();
        let report = run_strategy(&grid, Strategy::AStar);
        let text = report.to_string();
        assert!(text.starts_with("A* OK! Steps: 2 Nodes: 3 T: "), "{}", text);

        let grid = Grid::parse("SX\nXE").unwrap();
        let report = run_strategy(&grid, Strategy::Greedy);
        let text = report.to_string();
        assert!(
            text.starts_with("Greedy Best-First found no path. Nodes: 1 T: "),
            "{}",
            text
        );
    }
}
