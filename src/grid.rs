use crate::cell::Cell;
use crate::{Point, ALLOW_DIAGONAL, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::grid::{Grid as ValueGrid, SimpleGrid};
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::error::Error;

/// Reasons a [Grid] cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    EmptyGrid { rows: usize, cols: usize },
    ZeroCellSize,
    /// A default endpoint could not be placed.
    Endpoint(EditError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::EmptyGrid { rows, cols } => {
                write!(f, "grid of {rows}x{cols} cells has no cells")
            }
            GridError::ZeroCellSize => write!(f, "cell size must be positive"),
            GridError::Endpoint(e) => write!(f, "cannot place endpoint: {}", e),
        }
    }
}

impl Error for GridError {}

/// Reasons an edit is rejected. A rejected edit leaves the grid unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditError {
    OutOfBounds(Point),
    /// The cell holds the source or destination and cannot become an obstacle.
    EndpointCell(Point),
    /// The cell is an obstacle and cannot hold an endpoint.
    ObstacleCell(Point),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EditError::OutOfBounds(p) => write!(f, "{} is outside the grid", p),
            EditError::EndpointCell(p) => write!(f, "{} holds an endpoint", p),
            EditError::ObstacleCell(p) => write!(f, "{} is an obstacle", p),
        }
    }
}

impl Error for EditError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

/// What a cell should be drawn as, in order of precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Obstacle,
    Source,
    Destination,
    Visited,
    Open,
}

/// [Grid] stores its [Cell]s in a row-major [SimpleGrid] so that parent links are plain
/// indices. It also keeps the two endpoints, which never sit on an obstacle, and maintains
/// connected components in a [UnionFind] structure for cheap reachability checks.
#[derive(Clone, Debug)]
pub struct Grid {
    cell_size: usize,
    cells: SimpleGrid<Cell>,
    source: Point,
    destination: Point,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Allocates a `rows` by `cols` grid of obstacle-free cells of `cell_size` pixels and links
    /// up their neighbours. The source is placed at the middle row of the first column and the
    /// destination at the middle row of the last column.
    pub fn build(rows: usize, cols: usize, cell_size: usize) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        let mut cells = SimpleGrid::new(cols, rows, Cell::new(0, 0, cell_size));
        for row in 0..rows {
            for col in 0..cols {
                cells.set(col, row, Cell::new(row, col, cell_size));
            }
        }
        let mid = (rows / 2) as i32;
        let mut grid = Grid {
            cell_size,
            cells,
            source: Point::new(0, mid),
            destination: Point::new(cols as i32 - 1, mid),
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.find_neighbours();
        grid.generate_components();
        info!("Built {}x{} grid with cell size {}", rows, cols, cell_size);
        Ok(grid)
    }

    /// Candidate neighbours of a point, before bounds checks.
    pub fn neighborhood_points(&self, point: &Point) -> Vec<Point> {
        if ALLOW_DIAGONAL {
            point.moore_neighborhood()
        } else {
            point.neumann_neighborhood()
        }
    }

    fn find_neighbours(&mut self) {
        for ix in 0..self.cells.values.len() {
            let p = self.cells.values[ix].position;
            let mask = self
                .neighborhood_points(&p)
                .into_iter()
                .filter(|n| self.cells.point_in_bounds(*n))
                .fold(0_u8, |mask, n| mask | 1 << p.dir_obj(&n).num());
            self.cells.values[ix].neighbours = mask;
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }

    pub fn cols(&self) -> usize {
        self.cells.width()
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn source(&self) -> Point {
        self.source
    }

    pub fn destination(&self) -> Point {
        self.destination
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        self.cells.point_in_bounds(point)
    }

    /// Row-major index of `point`, or [None] if it lies outside the grid.
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(self.cells.get_ix_point(&point))
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells.values
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells.values
    }

    pub(crate) fn cell(&self, ix: usize) -> &Cell {
        &self.cells.values[ix]
    }

    /// Row-major indices of the neighbours of the cell at `ix`.
    pub(crate) fn neighbour_indices(&self, ix: usize) -> SmallVec<[usize; N_SMALLVEC_SIZE]> {
        self.cell(ix)
            .neighbour_points()
            .iter()
            .map(|n| self.cells.get_ix_point(n))
            .collect()
    }

    /// In-bounds neighbours of `point`, or [None] if it lies outside the grid.
    pub fn neighbours_of(&self, point: Point) -> Option<SmallVec<[Point; N_SMALLVEC_SIZE]>> {
        self.lookup_one(point).map(Cell::neighbour_points)
    }

    pub fn lookup_one(&self, point: Point) -> Option<&Cell> {
        self.index_of(point).map(|ix| self.cell(ix))
    }

    /// Looks up every point in order. Returns [None] if any of them is out of bounds.
    pub fn lookup_many(&self, points: &[Point]) -> Option<Vec<&Cell>> {
        points.iter().map(|p| self.lookup_one(*p)).collect()
    }

    pub fn endpoint(&self, which: Endpoint) -> Point {
        match which {
            Endpoint::Source => self.source,
            Endpoint::Destination => self.destination,
        }
    }

    pub fn is_endpoint(&self, point: Point) -> bool {
        point == self.source || point == self.destination
    }

    pub fn is_obstacle(&self, point: Point) -> bool {
        self.lookup_one(point).map_or(false, |c| c.obstacle)
    }

    /// Updates the obstacle flag of a cell. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart.
    pub fn set_obstacle(&mut self, point: Point, obstacle: bool) -> Result<(), EditError> {
        let ix = self.index_of(point).ok_or(EditError::OutOfBounds(point))?;
        if self.is_endpoint(point) {
            return Err(EditError::EndpointCell(point));
        }
        if self.cell(ix).obstacle == obstacle {
            return Ok(());
        }
        self.cells.values[ix].obstacle = obstacle;
        if obstacle {
            self.components_dirty = true;
        } else {
            for n in self.neighbour_indices(ix) {
                if !self.cell(n).obstacle {
                    self.components.union(ix, n);
                }
            }
        }
        Ok(())
    }

    /// Moves an endpoint. Endpoints may share a cell but never sit on an obstacle.
    pub fn set_endpoint(&mut self, which: Endpoint, point: Point) -> Result<(), EditError> {
        let cell = self.lookup_one(point).ok_or(EditError::OutOfBounds(point))?;
        if cell.obstacle {
            return Err(EditError::ObstacleCell(point));
        }
        match which {
            Endpoint::Source => self.source = point,
            Endpoint::Destination => self.destination = point,
        }
        Ok(())
    }

    /// Resets the search state of every cell.
    pub fn reset(&mut self) {
        self.cells.values.iter_mut().for_each(Cell::reset);
    }

    pub fn cell_state(&self, point: Point) -> Option<CellState> {
        let cell = self.lookup_one(point)?;
        Some(if cell.obstacle {
            CellState::Obstacle
        } else if point == self.source {
            CellState::Source
        } else if point == self.destination {
            CellState::Destination
        } else if cell.visited {
            CellState::Visited
        } else {
            CellState::Open
        })
    }

    /// Checks if start and goal are on the same connected component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same connected component. Components must be
    /// up to date, see [update](Self::update).
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.index_of(*start), self.index_of(*goal)) {
            (Some(start_ix), Some(goal_ix)) => !self.components.equiv(start_ix, goal_ix),
            _ => true,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        self.components = UnionFind::new(self.cells.values.len());
        self.components_dirty = false;
        for ix in 0..self.cells.values.len() {
            if self.cell(ix).obstacle {
                continue;
            }
            for n in self.neighbour_indices(ix) {
                if !self.cell(n).obstacle {
                    self.components.union(ix, n);
                }
            }
        }
    }

    pub(crate) fn state_char(&self, point: Point) -> char {
        match self.cell_state(point) {
            Some(CellState::Obstacle) => '#',
            Some(CellState::Source) => 'S',
            Some(CellState::Destination) => 'G',
            Some(CellState::Visited) => ':',
            Some(CellState::Open) | None => '.',
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() as i32 {
            let line = (0..self.cols() as i32)
                .map(|col| self.state_char(Point::new(col, row)))
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
