//! Fuzzes the pathfinding system on many random grids: a path must be found
//! exactly when the endpoints share a connected component, its cost must
//! equal the breadth-first-search distance (on a unit-cost 8-connected grid
//! the shortest path length equals the BFS distance), and the path itself
//! must be well formed. Multi-goal selection is cross-checked against
//! independent single-goal searches.

use grid_astar::{Cell, OccupancyGrid, Pathfinder};
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

const N: i32 = 10;
const N_GRIDS: usize = 1000;

fn random_grid(n: i32, rng: &mut StdRng, keep_open: &[Cell]) -> OccupancyGrid {
    let mut blocked = Vec::new();
    for y in 1..=n {
        for x in 1..=n {
            let cell = Cell::new(x, y);
            if !keep_open.contains(&cell) && rng.gen_bool(0.4) {
                blocked.push(cell);
            }
        }
    }
    OccupancyGrid::new(n, n, blocked).unwrap()
}

fn random_cell(n: i32, rng: &mut StdRng) -> Cell {
    Cell::new(rng.gen_range(1..=n), rng.gen_range(1..=n))
}

/// Brute-force reference distance for the optimality cross-check.
fn bfs_distance(grid: &OccupancyGrid, start: Cell, goal: Cell) -> Option<usize> {
    if !grid.is_traversable(start) || !grid.is_traversable(goal) {
        return None;
    }
    let mut distance: HashMap<Cell, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    distance.insert(start, 0);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        let d = distance[&cell];
        if cell == goal {
            return Some(d);
        }
        for neighbor in grid.neighbors(cell) {
            distance.entry(neighbor).or_insert_with(|| {
                queue.push_back(neighbor);
                d + 1
            });
        }
    }
    None
}

fn visualize_grid(grid: &OccupancyGrid, start: &Cell, end: &Cell) {
    for y in 1..=grid.max_y() {
        for x in 1..=grid.max_x() {
            let cell = Cell::new(x, y);
            if *start == cell {
                print!("S");
            } else if *end == cell {
                print!("G");
            } else if grid.is_blocked(cell) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn assert_well_formed(grid: &OccupancyGrid, path: &[Cell], start: Cell, goal: Cell) {
    assert_eq!(path[0], start);
    assert_eq!(*path.last().unwrap(), goal);
    for pair in path.windows(2) {
        assert!(pair[0].adjacent(&pair[1]), "{} -> {} is not a move", pair[0], pair[1]);
    }
    for cell in path {
        assert!(!grid.is_blocked(*cell), "path crosses blocked {}", cell);
    }
}

#[test]
fn fuzz_existence_and_optimality() {
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(1, 1);
    let end = Cell::new(N, N);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng, &[start, end]);
        let expected = bfs_distance(&grid, start, end);
        let pathfinder = Pathfinder::new(grid);
        let path = pathfinder.find_path(start, end).unwrap();
        if path.is_some() != expected.is_some() {
            visualize_grid(pathfinder.grid(), &start, &end);
        }
        assert_eq!(
            path.is_some(),
            pathfinder.grid().reachable(start, end),
            "existence must match component reachability"
        );
        match (path, expected) {
            (Some(path), Some(distance)) => {
                assert_well_formed(pathfinder.grid(), &path, start, end);
                if Pathfinder::path_cost(&path) != distance {
                    visualize_grid(pathfinder.grid(), &start, &end);
                    panic!(
                        "suboptimal path: cost {} but BFS distance {}",
                        Pathfinder::path_cost(&path),
                        distance
                    );
                }
            }
            (None, None) => {}
            (path, expected) => panic!(
                "existence mismatch: A* {:?}, BFS {:?}",
                path.map(|p| Pathfinder::path_cost(&p)),
                expected
            ),
        }
    }
}

#[test]
fn fuzz_random_endpoints() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng, &[]);
        let start = random_cell(N, &mut rng);
        let goal = random_cell(N, &mut rng);
        let expected = bfs_distance(&grid, start, goal);
        let pathfinder = Pathfinder::new(grid);
        let path = pathfinder.find_path(start, goal).unwrap();
        assert_eq!(path.as_ref().map(|p| Pathfinder::path_cost(p)), expected);
        if let Some(path) = path {
            assert_well_formed(pathfinder.grid(), &path, start, goal);
        }
    }
}

#[test]
fn fuzz_multi_goal_selection() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let start = Cell::new(1, 1);
        let grid = random_grid(N, &mut rng, &[start]);
        let goals: Vec<Cell> = (0..4).map(|_| random_cell(N, &mut rng)).collect();
        let pathfinder = Pathfinder::new(grid);

        let single_costs: Vec<Option<usize>> = goals
            .iter()
            .map(|&g| {
                pathfinder
                    .find_path(start, g)
                    .unwrap()
                    .map(|p| Pathfinder::path_cost(&p))
            })
            .collect();
        let best = pathfinder.find_best_path(start, &goals).unwrap();

        match single_costs.iter().flatten().min() {
            Some(&min_cost) => {
                let (path, winner) = best.expect("a goal is reachable");
                assert_eq!(Pathfinder::path_cost(&path), min_cost);
                // Earliest goal achieving the minimum wins the tie.
                let expected_winner = goals
                    .iter()
                    .zip(&single_costs)
                    .find(|(_, c)| **c == Some(min_cost))
                    .map(|(g, _)| *g)
                    .unwrap();
                assert_eq!(winner, expected_winner);
            }
            None => assert!(best.is_none()),
        }
    }
}
