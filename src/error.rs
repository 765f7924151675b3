use crate::cell::Cell;
use thiserror::Error;

/// Errors surfaced by grid construction and path queries. An absent path is
/// not an error; it is the `None` result of a query.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Grid bounds must both be at least 1.
    #[error("invalid grid bounds {max_x}x{max_y}: both dimensions must be at least 1")]
    InvalidGrid { max_x: i32, max_y: i32 },
    /// A supplied cell lies outside `[1, max_x] × [1, max_y]`. Coordinates
    /// are never clamped.
    #[error("cell {cell} lies outside the {max_x}x{max_y} grid")]
    OutOfBounds { cell: Cell, max_x: i32, max_y: i32 },
}
