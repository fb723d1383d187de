use grid_search_lab::prelude::*;
use grid_search_lab::PointSet;
use nanorand::{Rng, WyRand};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bundled(name: &str) -> Grid {
    Grid::load(format!("{}/data/{}", env!("CARGO_MANIFEST_DIR"), name)).unwrap()
}

/// A random map with about `wall_percent` obstacles and start/goal on different cells
fn random_grid(rng: &mut WyRand, wall_percent: u32) -> Grid {
    let width = rng.generate_range(2_usize..=14);
    let height = rng.generate_range(2_usize..=14);
    let start = rng.generate_range(0..width * height);
    let mut goal = rng.generate_range(0..width * height - 1);
    if goal >= start {
        goal += 1;
    }

    let mut text = String::with_capacity((width + 1) * height);
    for index in 0..width * height {
        if index > 0 && index % width == 0 {
            text.push('\n');
        }
        let c = if index == start {
            'S'
        } else if index == goal {
            'E'
        } else if rng.generate_range(0_u32..100) < wall_percent {
            'X'
        } else {
            '.'
        };
        text.push(c);
    }
    text.parse().unwrap()
}

/// Number of walkable cells connected to `from`
fn reachable_cells(grid: &Grid, from: Point) -> usize {
    let mut seen = PointSet::default();
    let mut todo = vec![from];
    let mut neighbors = vec![];
    seen.insert(from);
    while let Some(current) = todo.pop() {
        neighbors.clear();
        grid.neighborhood().get_all_neighbors(current, &mut neighbors);
        for &next in &neighbors {
            if grid.is_walkable(next) && seen.insert(next) {
                todo.push(next);
            }
        }
    }
    seen.len()
}

fn assert_valid_path(grid: &Grid, path: &[Point]) {
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.goal()));
    for &point in path {
        assert!(grid.is_walkable(point), "{:?} is not walkable", point);
    }
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_eq!(
            a.0.abs_diff(b.0) + a.1.abs_diff(b.1),
            1,
            "{:?} -> {:?} is not a unit move",
            a,
            b
        );
    }
}

#[test]
fn base_case() {
    init();
    let grid: Grid = "S..\nX.X\n..E".parse().unwrap();

    let a_star = search(&grid, grid.start(), grid.goal(), Strategy::AStar);
    let dijkstra = search(&grid, grid.start(), grid.goal(), Strategy::Dijkstra);

    let path = a_star.path().unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path.cost(), 4);
    assert!(a_star.nodes_explored() <= dijkstra.nodes_explored());
    assert_valid_path(&grid, path);
}

#[test]
fn malformed_map() {
    let err = Grid::parse("SXE\nXX").unwrap_err();
    assert!(matches!(err, GridError::InconsistentRowLength { .. }));
}

#[test]
fn bundled_maps() {
    init();
    // (map, [(path cost, nodes explored); Dijkstra, A*, Greedy])
    let expected = [
        ("base_case.txt", [(4, 6), (4, 6), (4, 6)]),
        ("greedy_trap.txt", [(9, 19), (9, 15), (11, 12)]),
        ("maze.txt", [(39, 47), (39, 45), (39, 42)]),
        ("no_path.txt", [(-1, 12), (-1, 12), (-1, 12)]),
        ("open_field.txt", [(26, 156), (26, 156), (26, 27)]),
    ];
    for (name, runs) in expected {
        let grid = bundled(name);
        for (strategy, (cost, nodes)) in Strategy::ALL.into_iter().zip(runs) {
            let result = search(&grid, grid.start(), grid.goal(), strategy);
            assert_eq!(
                (result.path_cost(), result.nodes_explored()),
                (cost, nodes),
                "{} with {}",
                name,
                strategy
            );
            if let Some(path) = result.path() {
                assert_valid_path(&grid, path);
            }
        }
    }
}

#[test]
fn a_star_matches_dijkstra() {
    init();
    let mut rng = WyRand::new_seed(0x5eed);
    for _ in 0..300 {
        let grid = random_grid(&mut rng, 30);
        let a_star = search(&grid, grid.start(), grid.goal(), Strategy::AStar);
        let dijkstra = search(&grid, grid.start(), grid.goal(), Strategy::Dijkstra);

        assert_eq!(a_star.path_cost(), dijkstra.path_cost(), "\n{}", grid);
        assert!(a_star.nodes_explored() <= dijkstra.nodes_explored());
        if let Some(path) = a_star.path() {
            assert_eq!(path.cost(), path.len() - 1);
            assert_valid_path(&grid, path);
        }
    }
}

#[test]
fn greedy_never_beats_the_optimum() {
    let mut rng = WyRand::new_seed(42);
    for _ in 0..300 {
        let grid = random_grid(&mut rng, 25);
        let greedy = search(&grid, grid.start(), grid.goal(), Strategy::Greedy);
        let dijkstra = search(&grid, grid.start(), grid.goal(), Strategy::Dijkstra);

        assert_eq!(greedy.found(), dijkstra.found(), "\n{}", grid);
        if let Some(path) = greedy.path() {
            assert!(greedy.path_cost() >= dijkstra.path_cost());
            assert_valid_path(&grid, path);
        }
    }
}

#[test]
fn exhaustion_is_bounded_by_the_reachable_area() {
    let mut rng = WyRand::new_seed(7);
    for _ in 0..300 {
        let grid = random_grid(&mut rng, 45);
        let reachable = reachable_cells(&grid, grid.start());
        for strategy in Strategy::ALL {
            let result = search(&grid, grid.start(), grid.goal(), strategy);
            assert!(result.nodes_explored() <= reachable);
            if !result.found() {
                assert_eq!(result.nodes_explored(), reachable, "\n{}", grid);
            }
        }
    }
}

#[test]
fn explored_nodes_are_unique() {
    let mut rng = WyRand::new_seed(99);
    for _ in 0..100 {
        let grid = random_grid(&mut rng, 20);
        let result = search(&grid, grid.start(), grid.goal(), Strategy::AStar);
        let unique: PointSet = result.explored().iter().copied().collect();
        assert_eq!(unique.len(), result.nodes_explored());
        assert_eq!(result.explored().first(), Some(&grid.start()));
    }
}

#[test]
fn searches_are_deterministic() {
    let mut rng = WyRand::new_seed(1234);
    for _ in 0..50 {
        let grid = random_grid(&mut rng, 20);
        for strategy in Strategy::ALL {
            let first = search(&grid, grid.start(), grid.goal(), strategy);
            let second = search(&grid, grid.start(), grid.goal(), strategy);
            assert_eq!(first.explored(), second.explored());
            assert_eq!(first, second);
        }
    }
}

#[test]
fn start_equals_goal() {
    let grid = bundled("maze.txt");
    for strategy in Strategy::ALL {
        let result = search(&grid, grid.start(), grid.start(), strategy);
        assert_eq!(result.path().unwrap().points(), &[grid.start()]);
        assert_eq!(result.path_cost(), 0);
        assert_eq!(result.nodes_explored(), 1);
    }
}

#[test]
fn enclosed_start() {
    let grid: Grid = "SX.\nX..\n..E".parse().unwrap();
    for strategy in Strategy::ALL {
        let result = search(&grid, grid.start(), grid.goal(), strategy);
        assert!(!result.found());
        assert_eq!(result.nodes_explored(), 1);
    }
}

#[test]
fn compare_all_strategies() {
    init();
    let grid = bundled("greedy_trap.txt");
    let reports = run_all_strategies(&grid);
    let costs: Vec<isize> = reports.iter().map(|r| r.result().path_cost()).collect();
    assert_eq!(costs, vec![9, 9, 11]);
}
