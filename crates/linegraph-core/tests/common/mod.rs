// File: crates/linegraph-core/tests/common/mod.rs
// Purpose: Shared fixtures for the integration tests (fixed-size recording surface, op filters).

#![allow(dead_code)]

use linegraph_core::recording::Op;
use linegraph_core::{Color, LineGraph, Point, RecordingSurface, Theme};

/// 1000x500 surface: plot area is left 150, top 75, width 800, height 350 (bottom 425).
pub const W: f64 = 1000.0;
pub const H: f64 = 500.0;
pub const PLOT_LEFT: f64 = 150.0;
pub const PLOT_TOP: f64 = 75.0;
pub const PLOT_WIDTH: f64 = 800.0;
pub const PLOT_HEIGHT: f64 = 350.0;
pub const PLOT_BOTTOM: f64 = 425.0;

/// Strokes making up the base grid: 9 + 9 interior lines and the 4 frame edges.
pub const GRID_STROKES: usize = 22;

pub fn graph() -> LineGraph<RecordingSurface> {
    LineGraph::new(RecordingSurface::new(W, H))
}

pub fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-6, "expected {want}, got {got}");
}

/// Row of band fraction `f` in the test layout.
pub fn row(f: f64) -> f64 {
    PLOT_BOTTOM - PLOT_HEIGHT * f
}

/// Polyline of the curve stroked in `color` (the 2px stroke), most recent first match.
pub fn curve_points(surface: &RecordingSurface, color: Color) -> Vec<Point> {
    surface
        .strokes()
        .filter(|op| {
            let pen = op.pen().expect("stroke has pen");
            pen.stroke == color && pen.line_width == Theme::neutral().curve_width
        })
        .last()
        .map(Op::points)
        .unwrap_or_default()
}

pub fn count_strokes_in(surface: &RecordingSurface, color: Color) -> usize {
    surface.strokes().filter(|op| op.pen().map(|p| p.stroke) == Some(color)).count()
}

pub fn texts(surface: &RecordingSurface) -> Vec<(String, Point)> {
    surface.texts().map(|(t, at, _)| (t.to_string(), at)).collect()
}
