use crate::grid::Grid;
use crate::{euclidean_distance, Point};
use itertools::Itertools;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    /// The parent chain ends at the source.
    Found,
    /// The destination has no parent chain to the source; the path only holds the destination.
    Unreachable,
}

/// Route between the endpoints as produced by [build_path]. Cells are stored in the order
/// they are walked, from destination back to source.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    cells: Vec<Point>,
    outcome: PathOutcome,
}

impl Path {
    pub fn outcome(&self) -> PathOutcome {
        self.outcome
    }

    pub fn is_found(&self) -> bool {
        self.outcome == PathOutcome::Found
    }

    /// Number of cells, including both endpoints.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells from destination to source.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Cells from source to destination.
    pub fn from_source(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().rev().copied()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.is_found() && self.cells.contains(&point)
    }

    /// Line segments between consecutive cell centers, for drawing. Empty unless a path was
    /// found.
    pub fn segments<'a>(
        &'a self,
        grid: &'a Grid,
    ) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + 'a {
        let cells: &'a [Point] = if self.is_found() { &self.cells } else { &[] };
        cells
            .iter()
            .filter_map(move |p| grid.lookup_one(*p).map(|c| c.center))
            .tuple_windows::<((f64, f64), (f64, f64))>()
    }

    /// Total Euclidean length of the path in pixels.
    pub fn cost(&self, grid: &Grid) -> f64 {
        self.segments(grid)
            .map(|(a, b)| euclidean_distance(a, b))
            .sum()
    }
}

/// Follows parent links from the destination until a cell without parent is reached. Meant
/// to run right after [search](crate::search::search).
pub fn build_path(grid: &Grid) -> Path {
    let Some(end) = grid.index_of(grid.destination()) else {
        return Path {
            cells: Vec::new(),
            outcome: PathOutcome::Unreachable,
        };
    };
    let mut cells = Vec::new();
    let mut last = end;
    let mut current = Some(end);
    while let Some(ix) = current {
        let cell = grid.cell(ix);
        cells.push(cell.position);
        last = ix;
        current = cell.parent;
    }
    let outcome = if grid.cell(last).position == grid.source() {
        PathOutcome::Found
    } else {
        PathOutcome::Unreachable
    };
    Path { cells, outcome }
}
