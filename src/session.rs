use crate::config::VisualizerConfig;
use crate::grid::{EditError, Endpoint, Grid, GridError};
use crate::input::{decode, PointerEvent};
use crate::path::{build_path, Path};
use crate::search::{search, SearchConfig, SearchStats};
use crate::Point;
use core::fmt;
use log::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditAction {
    PlaceObstacle,
    RemoveObstacle,
    SetSource,
    SetDestination,
}

/// A user edit of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    pub at: Point,
    pub action: EditAction,
}

impl Edit {
    pub fn new(at: Point, action: EditAction) -> Edit {
        Edit { at, action }
    }
}

/// Owns the grid together with the path of the last search. Every edit, applied or rejected,
/// is followed by a full search and path rebuild, so [path](Self::path) always matches the
/// current grid.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    path: Path,
    config: SearchConfig,
    stats: SearchStats,
    scale: usize,
}

impl Session {
    /// Builds the grid for the configured surface, places the default endpoints and computes
    /// the initial path.
    pub fn new(config: &VisualizerConfig) -> Result<Session, GridError> {
        let mut grid = Grid::build(config.rows(), config.cols(), config.scale)?;
        grid.set_endpoint(Endpoint::Source, config.default_source())
            .and_then(|_| grid.set_endpoint(Endpoint::Destination, config.default_destination()))
            .map_err(GridError::Endpoint)?;
        info!(
            "Session on {}x{} surface: source {}, destination {}",
            config.width,
            config.height,
            grid.source(),
            grid.destination()
        );
        Ok(Session::from_grid(grid, config.search))
    }

    /// Wraps an existing grid and computes its path.
    pub fn from_grid(mut grid: Grid, config: SearchConfig) -> Session {
        let stats = search(&mut grid, &config);
        let path = build_path(&grid);
        let scale = grid.cell_size();
        Session {
            grid,
            path,
            config,
            stats,
            scale,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn search_config(&self) -> SearchConfig {
        self.config
    }

    /// Applies an edit to the grid and recomputes the path. A rejected edit leaves the grid
    /// as it was, but the path is recomputed all the same.
    pub fn apply(&mut self, edit: Edit) -> Result<(), EditError> {
        let result = match edit.action {
            EditAction::PlaceObstacle => self.grid.set_obstacle(edit.at, true),
            EditAction::RemoveObstacle => self.grid.set_obstacle(edit.at, false),
            EditAction::SetSource => self.grid.set_endpoint(Endpoint::Source, edit.at),
            EditAction::SetDestination => self.grid.set_endpoint(Endpoint::Destination, edit.at),
        };
        if let Err(e) = &result {
            debug!("Rejected {:?}: {}", edit.action, e);
        }
        self.recompute();
        result
    }

    /// Decodes a pointer event and applies the resulting edit. Events that do not map onto
    /// the surface are ignored and do not trigger a search.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Result<(), EditError>> {
        decode(event, self.scale).map(|edit| self.apply(edit))
    }

    /// Runs a full search and replaces the path.
    pub fn recompute(&mut self) {
        self.stats = search(&mut self.grid, &self.config);
        self.path = build_path(&self.grid);
    }

    /// Checks via connected components whether the destination can be reached at all.
    pub fn is_reachable(&mut self) -> bool {
        self.grid.update();
        self.grid
            .reachable(&self.grid.source(), &self.grid.destination())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.rows() as i32 {
            let line = (0..self.grid.cols() as i32)
                .map(|col| {
                    let p = Point::new(col, row);
                    if !self.grid.is_endpoint(p) && self.path.contains(p) {
                        '*'
                    } else {
                        self.grid.state_char(p)
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::at;
    use crate::input::{Modifier, PointerButton};

    fn session_4x4() -> Session {
        let mut grid = Grid::build(4, 4, 10).unwrap();
        grid.set_endpoint(Endpoint::Source, at(0, 0)).unwrap();
        grid.set_endpoint(Endpoint::Destination, at(0, 3)).unwrap();
        Session::from_grid(grid, SearchConfig::default())
    }

    #[test]
    fn new_places_default_endpoints() {
        let session = Session::new(&VisualizerConfig::default()).unwrap();
        assert_eq!(session.grid().source(), at(16, 5));
        assert_eq!(session.grid().destination(), at(16, 27));
        assert!(session.path().is_found());
        assert_eq!(session.path().len(), 23);
    }

    #[test]
    fn new_with_zero_margin_uses_the_grid_edges() {
        let config = VisualizerConfig {
            endpoint_margin: 0,
            ..VisualizerConfig::default()
        };
        let session = Session::new(&config).unwrap();
        assert_eq!(session.grid().source(), at(16, 0));
        assert_eq!(session.grid().destination(), at(16, 31));
        assert!(session.path().is_found());
        assert_eq!(session.path().len(), 32);
    }

    #[test]
    fn new_rejects_surfaces_smaller_than_a_cell() {
        let config = VisualizerConfig {
            width: 10,
            height: 10,
            scale: 25,
            ..VisualizerConfig::default()
        };
        assert!(Session::new(&config).is_err());
    }

    #[test]
    fn rejected_edit_still_recomputes() {
        let mut session = session_4x4();
        let before = session.path().clone();
        assert_eq!(
            session.apply(Edit::new(at(0, 0), EditAction::PlaceObstacle)),
            Err(EditError::EndpointCell(at(0, 0)))
        );
        assert_eq!(session.path(), &before);
        assert!(session.stats().expanded > 0);
    }

    #[test]
    fn pointer_events_edit_the_grid() {
        let mut session = session_4x4();
        let press = PointerEvent::new(15, 5, PointerButton::Primary, Modifier::None);
        assert_eq!(session.handle_pointer(press), Some(Ok(())));
        assert!(session.grid().is_obstacle(at(0, 1)));
        assert_eq!(session.path().len(), 6);

        let erase = PointerEvent::new(15, 5, PointerButton::Secondary, Modifier::None);
        assert_eq!(session.handle_pointer(erase), Some(Ok(())));
        assert_eq!(session.path().len(), 4);

        let off = PointerEvent::new(-3, 5, PointerButton::Primary, Modifier::None);
        assert_eq!(session.handle_pointer(off), None);
    }

    #[test]
    fn reachability_follows_obstacles() {
        let mut session = session_4x4();
        assert!(session.is_reachable());
        session
            .apply(Edit::new(at(0, 2), EditAction::PlaceObstacle))
            .unwrap();
        session
            .apply(Edit::new(at(1, 3), EditAction::PlaceObstacle))
            .unwrap();
        assert!(!session.is_reachable());
        assert!(!session.path().is_found());
    }

    #[test]
    fn display_overlays_path() {
        let mut session = session_4x4();
        session
            .apply(Edit::new(at(2, 0), EditAction::PlaceObstacle))
            .unwrap();
        let rendered = format!("{}", session);
        assert_eq!(rendered.lines().next(), Some("S**G"));
        assert_eq!(rendered.lines().nth(2).map(|l| l.starts_with('#')), Some(true));
    }
}
