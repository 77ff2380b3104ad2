// File: crates/linegraph-core/tests/mapping.rs
// Purpose: Validate value-to-pixel mapping inside bands, fixed-range clamping and constant series.

mod common;

use common::*;
use linegraph_core::{Band, BandScale, Color, Rect, SeriesConfig, ValueRange};

fn plot() -> Rect {
    Rect::from_ltwh(PLOT_LEFT, PLOT_TOP, PLOT_WIDTH, PLOT_HEIGHT)
}

#[test]
fn cube_series_spans_its_band_exactly() {
    let record: Vec<f64> = (0..100).map(|i| (i as f64).powi(3)).collect();
    let series = SeriesConfig::new(record).with_band(0.6, 1.0);
    let mut graph = graph();
    graph.draw(&series, None);

    let pts = curve_points(graph.surface(), series.color.stroke);
    assert_eq!(pts.len(), 100);
    // Minimum on the lower band edge, maximum on the upper one.
    assert_close(pts[0].y, row(0.6));
    assert_close(pts[99].y, row(1.0));
    assert_close(pts[0].x, PLOT_LEFT);
    assert_close(pts[99].x, PLOT_LEFT + PLOT_WIDTH);
    for p in &pts {
        assert!(p.y >= row(1.0) - 1e-9 && p.y <= row(0.6) + 1e-9, "point {p:?} escapes band");
    }
    // Monotonic data climbs monotonically on screen.
    assert!(pts.windows(2).all(|w| w[1].y <= w[0].y));
}

#[test]
fn samples_are_evenly_spaced_across_plot_width() {
    let series = SeriesConfig::new(vec![3.0, 1.0, 4.0, 1.0, 5.0]);
    let mut graph = graph();
    graph.draw(&series, None);
    let pts = curve_points(graph.surface(), series.color.stroke);
    for (i, p) in pts.iter().enumerate() {
        assert_close(p.x, PLOT_LEFT + i as f64 * PLOT_WIDTH / 4.0);
    }
}

#[test]
fn fixed_range_clamps_out_of_range_samples() {
    let series = SeriesConfig::new(vec![0.0, 50.0, 45.0, -10.0]).with_range(0.0, 45.0);
    let mut graph = graph();
    graph.draw(&series, None);
    let pts = curve_points(graph.surface(), series.color.stroke);

    assert_close(pts[0].y, row(0.0));
    assert_close(pts[1].y, row(1.0));
    assert_close(pts[2].y, pts[1].y);
    assert_close(pts[3].y, row(0.0));
}

#[test]
fn fixed_range_defines_the_domain_not_the_data() {
    let scale = BandScale::new(
        plot(),
        Band::FULL,
        ValueRange::new(10.0, 20.0),
        Some(ValueRange::new(0.0, 40.0)),
        2,
    );
    assert_close(scale.y_for(10.0), row(0.25));
    assert_close(scale.y_for(20.0), row(0.5));
}

#[test]
fn constant_series_row_depends_only_on_sign() {
    let band = Band::new(0.2, 0.6);
    let at = |v: f64| BandScale::new(plot(), band, ValueRange::new(v, v), None, 3).y_for(v);

    assert_close(at(5.0), row(0.2));
    assert_close(at(500.0), row(0.2));
    assert_close(at(0.0), row(0.2));
    assert_close(at(-3.0), row(0.4));
    assert_close(at(-3000.0), row(0.4));
}

#[test]
fn constant_series_draws_flat_line_across_plot() {
    let series = SeriesConfig::new(vec![-7.0; 4]).with_band(0.2, 0.6);
    let mut graph = graph();
    graph.draw(&series, None);
    let pts = curve_points(graph.surface(), series.color.stroke);

    assert_eq!(pts.len(), 2);
    assert_close(pts[0].x, PLOT_LEFT);
    assert_close(pts[1].x, PLOT_LEFT + PLOT_WIDTH);
    assert_close(pts[0].y, row(0.4));
    assert_close(pts[1].y, row(0.4));
}

#[test]
fn single_sample_sits_on_left_edge() {
    let scale = BandScale::new(plot(), Band::FULL, ValueRange::new(2.0, 2.0), None, 1);
    assert_close(scale.point(0, 2.0).x, PLOT_LEFT);
    assert_close(scale.index_at(PLOT_LEFT + 300.0), 0.0);
}

#[test]
fn area_fill_closes_on_zero_row() {
    let series = SeriesConfig::new(vec![-10.0, 30.0]).with_colors(Color::rgb(200, 0, 0), Color::rgba(200, 0, 0, 40));
    let mut graph = graph();
    graph.draw(&series, None);
    let surface = graph.surface();

    let fill = surface
        .fills()
        .find(|op| op.pen().map(|p| p.fill) == Some(Color::rgba(200, 0, 0, 40)))
        .expect("area fill");
    let pts = fill.points();
    let zero = row(0.25);
    let n = pts.len();
    assert_close(pts[n - 2].x, PLOT_LEFT + PLOT_WIDTH);
    assert_close(pts[n - 2].y, zero);
    assert_close(pts[n - 1].x, PLOT_LEFT);
    assert_close(pts[n - 1].y, zero);
}

#[test]
fn shadow_baseline_is_clamped_into_band() {
    let scale = BandScale::new(plot(), Band::new(0.0, 0.5), ValueRange::new(10.0, 20.0), None, 5);
    // Zero lies below the band, so the fill stops at the band bottom.
    assert_close(scale.shadow_y(None), row(0.0));
    assert_close(scale.shadow_y(Some(15.0)), row(0.25));
    assert_close(scale.shadow_y(Some(99.0)), row(0.5));
}

#[test]
fn zero_line_drawn_only_when_zero_is_in_band() {
    let axis = Color::rgb(1, 2, 3);
    let mut crossing = SeriesConfig::new(vec![-5.0, 15.0]);
    crossing.color.axis = Some(axis);
    let mut graph = graph();
    graph.draw(&crossing, None);
    let zero_lines: Vec<_> = graph
        .surface()
        .strokes()
        .filter(|op| op.pen().map(|p| p.stroke) == Some(axis))
        .collect();
    assert_eq!(zero_lines.len(), 1);
    let pts = zero_lines[0].points();
    assert_close(pts[0].y, row(0.25));
    assert_close(pts[1].y, row(0.25));

    let mut positive = SeriesConfig::new(vec![5.0, 15.0]);
    positive.color.axis = Some(axis);
    graph.clear();
    graph.draw(&positive, None);
    assert_eq!(count_strokes_in(graph.surface(), axis), 0);

    let mut hidden = crossing.clone();
    hidden.x_axis.visible = false;
    graph.clear();
    graph.draw(&hidden, None);
    assert_eq!(count_strokes_in(graph.surface(), axis), 0);
}

#[test]
fn zero_line_suppressed_for_fixed_range_above_zero() {
    let axis = Color::rgb(1, 2, 3);
    let mut series = SeriesConfig::new(vec![-5.0, 15.0]).with_range(10.0, 20.0);
    series.color.axis = Some(axis);
    let mut graph = graph();
    graph.draw(&series, None);
    assert_eq!(count_strokes_in(graph.surface(), axis), 0);
}
