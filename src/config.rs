use crate::search::SearchConfig;
use crate::{at, Point};

pub const DEFAULT_SURFACE_WIDTH: usize = 800;
pub const DEFAULT_SURFACE_HEIGHT: usize = 800;
pub const DEFAULT_SCALE: usize = 25;
pub const DEFAULT_ENDPOINT_MARGIN: usize = 5;

/// Drawing surface and search settings a [Session](crate::session::Session) is created from.
/// The surface size divided by the scale gives the grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Surface width in pixels.
    pub width: usize,
    /// Surface height in pixels.
    pub height: usize,
    /// Side length of a cell in pixels.
    pub scale: usize,
    /// Distance in columns of the default endpoints from the left and right edges.
    pub endpoint_margin: usize,
    pub search: SearchConfig,
}

impl Default for VisualizerConfig {
    fn default() -> VisualizerConfig {
        VisualizerConfig {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            scale: DEFAULT_SCALE,
            endpoint_margin: DEFAULT_ENDPOINT_MARGIN,
            search: SearchConfig::default(),
        }
    }
}

impl VisualizerConfig {
    pub fn rows(&self) -> usize {
        self.height.checked_div(self.scale).unwrap_or(0)
    }

    pub fn cols(&self) -> usize {
        self.width.checked_div(self.scale).unwrap_or(0)
    }

    /// Default source: middle row, `endpoint_margin` columns from the left edge, clamped into
    /// the grid.
    pub fn default_source(&self) -> Point {
        let col = self.endpoint_margin.min(self.cols().saturating_sub(1));
        at((self.rows() / 2) as i32, col as i32)
    }

    /// Default destination: middle row, `endpoint_margin` columns from the right edge, clamped
    /// into the grid.
    pub fn default_destination(&self) -> Point {
        let cols = self.cols();
        let col = cols
            .checked_sub(self.endpoint_margin)
            .filter(|&col| col > 0 && col < cols)
            .unwrap_or(cols.saturating_sub(1));
        at((self.rows() / 2) as i32, col as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_gives_32_by_32_grid() {
        let config = VisualizerConfig::default();
        assert_eq!(config.rows(), 32);
        assert_eq!(config.cols(), 32);
        assert_eq!(config.default_source(), at(16, 5));
        assert_eq!(config.default_destination(), at(16, 27));
    }

    #[test]
    fn endpoints_are_clamped_on_narrow_surfaces() {
        let config = VisualizerConfig {
            width: 40,
            height: 30,
            scale: 10,
            ..VisualizerConfig::default()
        };
        assert_eq!(config.default_source(), at(1, 3));
        assert_eq!(config.default_destination(), at(1, 3));
    }

    #[test]
    fn zero_margin_keeps_destination_in_the_last_column() {
        let config = VisualizerConfig {
            endpoint_margin: 0,
            ..VisualizerConfig::default()
        };
        assert_eq!(config.default_source(), at(16, 0));
        assert_eq!(config.default_destination(), at(16, 31));
    }

    #[test]
    fn zero_scale_gives_no_cells() {
        let config = VisualizerConfig {
            scale: 0,
            ..VisualizerConfig::default()
        };
        assert_eq!(config.rows(), 0);
        assert_eq!(config.cols(), 0);
    }
}
