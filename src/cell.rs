use crate::{Point, N_SMALLVEC_SIZE, UNVISITED_COST};
use smallvec::SmallVec;

/// A single grid position. The position, rendering center and neighbour mask are fixed once
/// the [Grid](crate::grid::Grid) is built; `obstacle` changes on user edits and the remaining
/// fields are search state which is reset before every search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub position: Point,
    /// Center of the cell on the drawing surface, in pixels.
    pub center: (f64, f64),
    pub obstacle: bool,
    pub visited: bool,
    /// Accumulated cost from the source.
    pub local_cost: f64,
    /// Local cost plus the heuristic estimate to the destination, used for frontier ordering.
    pub global_cost: f64,
    /// Row-major index of the preceding cell on the best known path.
    pub parent: Option<usize>,
    /// Adjacent in-bounds cells, one bit per [grid_util::Direction] number.
    pub neighbours: u8,
}

impl Cell {
    pub fn new(row: usize, col: usize, size: usize) -> Cell {
        let half = size as f64 * 0.5;
        Cell {
            position: Point::new(col as i32, row as i32),
            center: ((col * size) as f64 + half, (row * size) as f64 + half),
            obstacle: false,
            visited: false,
            local_cost: UNVISITED_COST,
            global_cost: UNVISITED_COST,
            parent: None,
            neighbours: 0,
        }
    }

    pub fn row(&self) -> usize {
        self.position.y as usize
    }

    pub fn col(&self) -> usize {
        self.position.x as usize
    }

    /// Positions of the neighbours recorded in the mask, in direction order.
    pub fn neighbour_points(&self) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        (0..8)
            .filter(|d| self.neighbours & (1 << d) != 0)
            .map(|d| self.position.moore_neighbor(d))
            .collect()
    }

    /// Clears search state, leaving position, neighbours and the obstacle flag untouched.
    pub fn reset(&mut self) {
        self.visited = false;
        self.local_cost = UNVISITED_COST;
        self.global_cost = UNVISITED_COST;
        self.parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::Direction;

    #[test]
    fn center_is_offset_by_half_a_cell() {
        let cell = Cell::new(2, 3, 10);
        assert_eq!(cell.center, (35.0, 25.0));
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 3);
    }

    #[test]
    fn neighbour_mask_decodes_to_points() {
        let mut cell = Cell::new(1, 1, 1);
        cell.neighbours = 1 << Direction::EAST.num() | 1 << Direction::NORTH.num();
        assert_eq!(
            cell.neighbour_points().into_vec(),
            vec![Point::new(1, 2), Point::new(2, 1)]
        );
    }

    #[test]
    fn reset_keeps_obstacle() {
        let mut cell = Cell::new(0, 0, 1);
        cell.obstacle = true;
        cell.visited = true;
        cell.local_cost = 1.0;
        cell.global_cost = 2.0;
        cell.parent = Some(4);
        cell.reset();
        assert!(cell.obstacle);
        assert!(!cell.visited);
        assert_eq!(cell.local_cost, UNVISITED_COST);
        assert_eq!(cell.global_cost, UNVISITED_COST);
        assert_eq!(cell.parent, None);
    }
}
