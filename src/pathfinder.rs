use crate::astar::astar_search;
use crate::cell::Cell;
use crate::error::GridError;
use crate::grid::OccupancyGrid;
use log::info;

/// Shortest-path queries over an [OccupancyGrid].
///
/// All search state lives inside a single call; the pathfinder itself holds
/// nothing but the grid, so it can be shared by reference between any number
/// of concurrent queries.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    grid: OccupancyGrid,
}

/// Straight-line distance scaled to never exceed the number of moves left.
/// With unit-cost diagonals the true grid distance is the Chebyshev
/// distance, and `euclidean / sqrt(2)` is bounded by it, making the
/// heuristic admissible and consistent.
fn heuristic(a: &Cell, b: &Cell) -> f32 {
    a.euclidean_distance(b) * std::f32::consts::FRAC_1_SQRT_2
}

impl Pathfinder {
    pub fn new(grid: OccupancyGrid) -> Pathfinder {
        Pathfinder { grid }
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The number of moves along `path`.
    pub fn path_cost(path: &[Cell]) -> usize {
        path.len().saturating_sub(1)
    }

    /// Computes a shortest path from `start` to `goal`, both inclusive, over
    /// the 8-connected grid with every move costing one.
    ///
    /// `Ok(None)` means no route exists; a blocked start or goal also yields
    /// `Ok(None)`, since a blocked cell is on no traversable component. An
    /// out-of-bounds endpoint is a precondition violation and surfaces as
    /// [GridError::OutOfBounds].
    pub fn find_path(&self, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>, GridError> {
        self.grid.check_in_bounds(start)?;
        self.grid.check_in_bounds(goal)?;
        if !self.grid.reachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        let result = astar_search(
            &start,
            |node| self.grid.neighbors(*node),
            |cell| heuristic(cell, &goal),
            |cell| *cell == goal,
        );
        Ok(result.map(|(path, _cost)| path))
    }

    /// Computes a shortest path from `start` to each of `goals` in turn and
    /// returns the cheapest one along with its goal.
    ///
    /// Per-goal searches are independent; no search state carries over
    /// between goals. When several goals tie on cost, the goal listed first
    /// wins. `Ok(None)` means no goal could be reached at all.
    pub fn find_best_path(
        &self,
        start: Cell,
        goals: &[Cell],
    ) -> Result<Option<(Vec<Cell>, Cell)>, GridError> {
        let mut best: Option<(Vec<Cell>, Cell)> = None;
        for &goal in goals {
            let Some(path) = self.find_path(start, goal)? else {
                continue;
            };
            let better = match &best {
                Some((best_path, _)) => Self::path_cost(&path) < Self::path_cost(best_path),
                None => true,
            };
            if better {
                best = Some((path, goal));
            }
        }
        Ok(best)
    }
}
