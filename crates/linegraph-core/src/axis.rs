// File: crates/linegraph-core/src/axis.rs
// Summary: Grid/frame, zero line, y tick labels, titles and x category labels.

use std::f64::consts::PI;

use crate::geometry::{Point, Rect};
use crate::layout::LayoutConfig;
use crate::scale::BandScale;
use crate::series::SeriesConfig;
use crate::surface::Surface;
use crate::text::{TextAlign, TextBaseline};
use crate::theme::Theme;
use crate::ticks::{format_value, nice_bounds, tick_values};

/// Reference grid across the plot area plus the frame around it.
pub fn draw_grid<S: Surface>(surface: &mut S, plot: Rect, theme: &Theme) {
    let mut pen = surface.scoped();
    pen.set_line_width(theme.grid_width);
    pen.set_stroke_color(theme.grid);

    let n = theme.grid_divisions.max(1);
    for i in 1..n {
        let x = plot.left + i as f64 * plot.width / n as f64;
        let y = plot.top + i as f64 * plot.height / n as f64;
        pen.stroke_segment(Point::new(x, plot.top), Point::new(x, plot.bottom()));
        pen.stroke_segment(Point::new(plot.left, y), Point::new(plot.right(), y));
    }

    pen.set_stroke_color(theme.frame);
    let (l, t, r, b) = (plot.left, plot.top, plot.right(), plot.bottom());
    pen.stroke_segment(Point::new(l, t), Point::new(l, b));
    pen.stroke_segment(Point::new(l, t), Point::new(r, t));
    pen.stroke_segment(Point::new(r, t), Point::new(r, b));
    pen.stroke_segment(Point::new(l, b), Point::new(r, b));
}

/// Horizontal line at value zero, when it falls inside the series band.
pub fn draw_zero_line<S: Surface>(surface: &mut S, scale: &BandScale, series: &SeriesConfig) {
    if !series.x_axis.visible {
        return;
    }
    if scale.fixed().is_some_and(|r| r.min > 0.0) || !scale.zero_in_band() {
        return;
    }
    let plot = scale.plot();
    let y = scale.zero_y();
    let mut pen = surface.scoped();
    pen.set_stroke_color(series.axis_color());
    pen.set_line_width(series.x_axis.width);
    pen.stroke_segment(Point::new(plot.left, y), Point::new(plot.right(), y));
}

/// Y tick labels, right-aligned left of the plot. Constant series get a single label.
pub fn draw_y_ticks<S: Surface>(surface: &mut S, scale: &BandScale, series: &SeriesConfig, layout: &LayoutConfig) {
    let axis = &series.y_axis;
    if axis.lines < 2 {
        return;
    }
    let x = layout.plot_left * 0.9;
    let mut pen = surface.scoped();
    pen.set_fill_color(series.color.stroke);
    pen.set_font(&layout.y_axis.font);
    pen.set_text_align(TextAlign::Right);
    pen.set_text_baseline(TextBaseline::Middle);

    if scale.is_constant() {
        let label = format_value(scale.extent().max, axis.precision);
        pen.fill_text(&label, Point::new(x, scale.constant_y()));
        return;
    }

    let nice = nice_bounds(scale.domain(), axis.precision, axis.rounding);
    let step = scale.band_height() / (axis.lines - 1) as f64;
    for (i, value) in tick_values(nice, axis.lines).into_iter().enumerate() {
        let y = scale.band_bottom() - step * i as f64;
        pen.fill_text(&format_value(value, axis.precision), Point::new(x, y));
    }
}

/// Series title: above the band, or rotated a quarter turn and centered on it.
pub fn draw_y_title<S: Surface>(surface: &mut S, scale: &BandScale, series: &SeriesConfig, layout: &LayoutConfig) {
    let title = &series.y_axis.title;
    if title.is_empty() {
        return;
    }
    let mut pen = surface.scoped();
    pen.set_fill_color(series.color.stroke);
    pen.set_font(&layout.y_axis.font);
    pen.set_text_align(TextAlign::Center);
    pen.set_text_baseline(TextBaseline::Middle);

    if series.y_axis.vertical_title {
        pen.translate(layout.plot_left * 0.2, scale.band_middle());
        pen.rotate(PI * 1.5);
        pen.fill_text(title, Point::new(0.0, 0.0));
    } else {
        let at = Point::new(layout.plot_left / 2.0, scale.band_top() - layout.plot_top / 2.0);
        pen.fill_text(title, at);
    }
}

/// Chart title centered above the plot area.
pub fn draw_chart_title<S: Surface>(surface: &mut S, layout: &LayoutConfig) {
    let title = &layout.title;
    if title.name.is_empty() {
        return;
    }
    let mut pen = surface.scoped();
    pen.set_text_align(TextAlign::Center);
    pen.set_text_baseline(TextBaseline::Bottom);
    pen.set_font(&title.font);
    pen.set_fill_color(title.color);
    let at = Point::new(layout.plot_left + layout.plot_width / 2.0, layout.plot_top * 0.75);
    pen.fill_text(&title.name, at);
}

/// X positions of `count` category labels spread over the plot width.
pub fn category_positions(plot: Rect, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![plot.left],
        _ => {
            let space = plot.width / (count - 1) as f64;
            (0..count).map(|i| plot.left + space * i as f64).collect()
        }
    }
}

/// Category labels (e.g. timestamps) under the plot area.
pub fn draw_category_labels<S: Surface>(surface: &mut S, layout: &LayoutConfig) {
    let labels = &layout.x_axis;
    if labels.values.is_empty() {
        return;
    }
    let y = layout.plot_top + layout.plot_height + layout.plot_top * 0.4;
    let mut pen = surface.scoped();
    pen.set_text_align(TextAlign::Center);
    pen.set_text_baseline(TextBaseline::Top);
    pen.set_font(&labels.font);
    pen.set_fill_color(labels.text_color);
    let xs = category_positions(layout.plot_area(), labels.values.len());
    for (label, x) in labels.values.iter().zip(xs) {
        pen.fill_text(label, Point::new(x, y));
    }
}
