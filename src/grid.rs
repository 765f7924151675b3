use crate::cell::{Cell, NEIGHBOR_OFFSETS};
use crate::error::GridError;
use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// A rectangular occupancy grid over 1-indexed cells, immutable after
/// construction. Blocked cells are kept in a dense boolean vector indexed by
/// `(y - 1) * max_x + (x - 1)`. Connected components over traversable cells
/// are pre-computed in a [UnionFind] so that queries between disconnected
/// cells can be rejected without flood-filling behaviour.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    max_x: i32,
    max_y: i32,
    blocked: Vec<bool>,
    components: UnionFind<usize>,
}

impl OccupancyGrid {
    /// Builds a grid with the given bounds and blocked cells.
    ///
    /// Fails with [GridError::InvalidGrid] if either bound is below 1 and
    /// with [GridError::OutOfBounds] if a blocked cell lies outside the
    /// bounds.
    pub fn new(
        max_x: i32,
        max_y: i32,
        blocked: impl IntoIterator<Item = Cell>,
    ) -> Result<OccupancyGrid, GridError> {
        if max_x < 1 || max_y < 1 {
            return Err(GridError::InvalidGrid { max_x, max_y });
        }
        let mut grid = OccupancyGrid {
            max_x,
            max_y,
            blocked: vec![false; (max_x * max_y) as usize],
            components: UnionFind::new(0),
        };
        for cell in blocked {
            if !grid.is_in_bounds(cell) {
                return Err(GridError::OutOfBounds { cell, max_x, max_y });
            }
            let ix = grid.get_ix(cell);
            grid.blocked[ix] = true;
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    fn get_ix(&self, cell: Cell) -> usize {
        ((cell.y - 1) * self.max_x + (cell.x - 1)) as usize
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 1 && cell.x <= self.max_x && cell.y >= 1 && cell.y <= self.max_y
    }

    /// Bounds check that reports the violating cell.
    pub fn check_in_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.is_in_bounds(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                max_x: self.max_x,
                max_y: self.max_y,
            })
        }
    }

    /// Whether `cell` is in the blocked set. Out-of-bounds cells are not
    /// blocked; they are simply not part of the grid.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.is_in_bounds(cell) && self.blocked[self.get_ix(cell)]
    }

    /// Whether `cell` can be occupied: in bounds and not blocked.
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.is_in_bounds(cell) && !self.blocked[self.get_ix(cell)]
    }

    /// The traversable neighborhood of `cell`, enumerated in
    /// [NEIGHBOR_OFFSETS] order.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 8]> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Cell::new(cell.x + dx, cell.y + dy))
            .filter(|&n| self.is_traversable(n))
            .collect()
    }

    /// Retrieves the component id a given traversable [Cell] belongs to.
    pub fn get_component(&self, cell: Cell) -> usize {
        self.components.find(self.get_ix(cell))
    }

    /// Checks if `a` and `b` are traversable and on the same component.
    pub fn reachable(&self, a: Cell, b: Cell) -> bool {
        self.is_traversable(a)
            && self.is_traversable(b)
            && self.components.equiv(self.get_ix(a), self.get_ix(b))
    }

    /// Generates a new [UnionFind] structure and links up traversable grid
    /// neighbours to the same components.
    fn generate_components(&mut self) {
        info!(
            "generating connected components for {}x{} grid",
            self.max_x, self.max_y
        );
        self.components = UnionFind::new((self.max_x * self.max_y) as usize);
        for y in 1..=self.max_y {
            for x in 1..=self.max_x {
                let cell = Cell::new(x, y);
                if self.blocked[self.get_ix(cell)] {
                    continue;
                }
                let ix = self.get_ix(cell);
                // Linking the forward half of the neighborhood visits every
                // adjacency exactly once.
                let forward = [
                    Cell::new(x + 1, y),
                    Cell::new(x - 1, y + 1),
                    Cell::new(x, y + 1),
                    Cell::new(x + 1, y + 1),
                ];
                for next in forward {
                    if self.is_traversable(next) {
                        let next_ix = self.get_ix(next);
                        self.components.union(ix, next_ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 1..=self.max_y {
            for x in 1..=self.max_x {
                let c = if self.is_blocked(Cell::new(x, y)) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_bounds() {
        assert!(matches!(
            OccupancyGrid::new(0, 5, []),
            Err(GridError::InvalidGrid { max_x: 0, max_y: 5 })
        ));
        assert!(matches!(
            OccupancyGrid::new(3, -1, []),
            Err(GridError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn rejects_out_of_bounds_blocked_cell() {
        let result = OccupancyGrid::new(3, 3, [Cell::new(4, 1)]);
        assert!(matches!(result, Err(GridError::OutOfBounds { cell, .. }) if cell == Cell::new(4, 1)));
    }

    #[test]
    fn blocked_and_bounds_queries() {
        let grid = OccupancyGrid::new(3, 3, [Cell::new(2, 2)]).unwrap();
        assert!(grid.is_blocked(Cell::new(2, 2)));
        assert!(!grid.is_blocked(Cell::new(1, 1)));
        assert!(!grid.is_blocked(Cell::new(0, 0)));
        assert!(grid.is_in_bounds(Cell::new(3, 3)));
        assert!(!grid.is_in_bounds(Cell::new(4, 3)));
        assert!(!grid.is_in_bounds(Cell::new(1, 0)));
    }

    #[test]
    fn corner_neighborhood_is_filtered() {
        let grid = OccupancyGrid::new(3, 3, [Cell::new(2, 1)]).unwrap();
        let neighbors = grid.neighbors(Cell::new(1, 1));
        // (2, 1) is blocked, (0, *) and (*, 0) are out of bounds.
        assert_eq!(neighbors.as_slice(), &[Cell::new(1, 2), Cell::new(2, 2)]);
    }

    #[test]
    fn component_generation_splits_walled_grid() {
        // A vertical wall at x = 2 splits a 3x4 grid into two components.
        let wall = (1..=4).map(|y| Cell::new(2, y));
        let grid = OccupancyGrid::new(3, 4, wall).unwrap();
        assert!(grid.reachable(Cell::new(1, 1), Cell::new(1, 4)));
        assert!(!grid.reachable(Cell::new(1, 1), Cell::new(3, 1)));
    }

    #[test]
    fn diagonal_adjacency_joins_components() {
        //  .#
        //  #.
        // With diagonal movement the two open corners stay connected.
        let grid = OccupancyGrid::new(2, 2, [Cell::new(2, 1), Cell::new(1, 2)]).unwrap();
        assert!(grid.reachable(Cell::new(1, 1), Cell::new(2, 2)));
    }

    #[test]
    fn blocked_cells_are_never_reachable() {
        let grid = OccupancyGrid::new(2, 2, [Cell::new(1, 2)]).unwrap();
        assert!(!grid.reachable(Cell::new(1, 1), Cell::new(1, 2)));
        assert!(!grid.reachable(Cell::new(1, 2), Cell::new(1, 2)));
    }
}
