use grid_astar::at;
use grid_astar::grid::{Endpoint, Grid};
use grid_astar::search::SearchConfig;
use grid_astar::session::{Edit, EditAction, Session};

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S    |
// |###  |
// |     |
// |  ###|
// |    G|
//  _____
// where
// - # marks an obstacle
// - S marks the source
// - G marks the destination
//
// Cells have a 4-neighborhood

fn main() {
    let mut grid = Grid::build(5, 5, 20).unwrap();
    grid.set_endpoint(Endpoint::Source, at(0, 0)).unwrap();
    grid.set_endpoint(Endpoint::Destination, at(4, 4)).unwrap();
    let mut session = Session::from_grid(grid, SearchConfig::default());
    for (row, col) in [(1, 0), (1, 1), (1, 2), (3, 2), (3, 3), (3, 4)] {
        session
            .apply(Edit::new(at(row, col), EditAction::PlaceObstacle))
            .unwrap();
    }
    println!("{}", session);
    println!("Path:");
    for p in session.path().from_source() {
        println!("{:?}", p);
    }
    println!("Length: {}", session.path().cost(session.grid()));
}
