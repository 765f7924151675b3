//! # grid_astar
//!
//! Multi-goal shortest paths on rectangular occupancy grids. An
//! [OccupancyGrid] marks blocked cells on a 1-indexed lattice and a
//! [Pathfinder] answers single-goal and best-of-several-goals queries with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the
//! 8-connected unit-cost grid graph. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! Tie-breaking is deterministic end to end: frontier entries order by
//! estimated total cost, then accumulated cost, then discovery order, and
//! multi-goal queries award cost ties to the goal listed first.
//!
//! The [loader] module builds a grid and its points of interest from the
//! area CSV tables; the [report] module writes a found path back out as a
//! coordinate listing or a text map.

mod astar;

pub mod cell;
pub mod error;
pub mod grid;
pub mod loader;
pub mod pathfinder;
pub mod report;

pub use cell::Cell;
pub use error::GridError;
pub use grid::OccupancyGrid;
pub use pathfinder::Pathfinder;
