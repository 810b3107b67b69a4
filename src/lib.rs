//! # grid_astar
//!
//! Interactive [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding on an
//! editable grid. Obstacles can be placed and removed and the two endpoints moved around;
//! every edit triggers a full re-search and a rebuilt path. Costs and the heuristic are both
//! the Euclidean distance between cell centers, so the heuristic is consistent and the
//! resulting paths are optimal.
//!
//! Coordinates are [Point]s where `x` is the column and `y` is the row, see [at].
//!
//! ```
//! use grid_astar::{at, grid::Grid, session::{Edit, EditAction, Session}, search::SearchConfig};
//!
//! let mut grid = Grid::build(4, 4, 10).unwrap();
//! grid.set_endpoint(grid_astar::grid::Endpoint::Source, at(0, 0)).unwrap();
//! grid.set_endpoint(grid_astar::grid::Endpoint::Destination, at(0, 3)).unwrap();
//! let mut session = Session::from_grid(grid, SearchConfig::default());
//! assert_eq!(session.path().len(), 4);
//!
//! session.apply(Edit::new(at(0, 1), EditAction::PlaceObstacle)).unwrap();
//! assert_eq!(session.path().len(), 6);
//! ```
pub mod cell;
pub mod config;
pub mod grid;
pub mod input;
pub mod path;
pub mod search;
pub mod session;

pub use grid_util::point::Point;

/// Scans the four diagonal offsets in addition to the cardinal ones when building
/// neighbourhoods. Movement is cardinal-only, so this stays off.
pub const ALLOW_DIAGONAL: bool = false;

/// Inline capacity of neighbour lists, enough for a full Moore neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Cost assigned to cells the search has not reached yet.
pub const UNVISITED_COST: f64 = f64::INFINITY;

/// Builds a [Point] from row-major `(row, col)` order.
pub fn at(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

/// Euclidean distance between two rendering positions.
pub fn euclidean_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
