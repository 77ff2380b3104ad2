// File: crates/linegraph-core/src/theme.rs
// Summary: Fixed neutral colors and stroke widths for the grid, frame, guide line and curves.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub grid: Color,
    pub frame: Color,
    pub guide: Color,
    pub grid_width: f64,
    pub guide_width: f64,
    pub curve_width: f64,
    /// Grid divisions per axis.
    pub grid_divisions: usize,
}

impl Theme {
    pub fn neutral() -> Self {
        Self {
            grid: Color::rgb(200, 200, 200),
            frame: Color::BLACK,
            guide: Color::rgb(160, 160, 160),
            grid_width: 1.0,
            guide_width: 1.0,
            curve_width: 2.0,
            grid_divisions: 10,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::neutral() }
}
