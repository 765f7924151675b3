use core::fmt;
use serde::{Deserialize, Serialize};

/// A 1-indexed grid coordinate. Valid cells of an
/// [OccupancyGrid](crate::OccupancyGrid) lie in `[1, max_x] × [1, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// The eight neighbor offsets, enumerated orthogonals first, then diagonals.
/// The order is fixed so that the shape of equal-cost paths is reproducible
/// between runs.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

impl Cell {
    pub fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// The straight-line distance to `other`.
    pub fn euclidean_distance(&self, other: &Cell) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// The number of moves needed to reach `other` on an open 8-connected
    /// grid (Chebyshev distance).
    pub fn move_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Whether `other` is one of the eight surrounding cells.
    pub fn adjacent(&self, other: &Cell) -> bool {
        self != other && self.move_distance(other) <= 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
