// File: crates/linegraph-core/src/interaction.rs
// Summary: Cursor hit testing, inverse X mapping with linear interpolation, and marker rendering.

use crate::geometry::{Point, Rect};
use crate::layout::LayoutConfig;
use crate::scale::BandScale;
use crate::series::SeriesConfig;
use crate::surface::Surface;
use crate::text::{TextAlign, TextBaseline};
use crate::theme::Theme;
use crate::ticks::format_value;

/// Formats the hovered X position (a fraction of the plot width) as a label.
pub type XLabelFormatter = Box<dyn Fn(f64) -> String>;

/// What lies under the cursor for one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probe {
    /// Fractional sample index.
    pub index: f64,
    /// Interpolated sample value.
    pub value: f64,
    /// Where the marker goes; clamped like the curve.
    pub marker: Point,
    /// Cursor X as a fraction of the plot width.
    pub fraction: f64,
}

pub fn is_over_plot(plot: Rect, cursor: Point) -> bool {
    plot.contains(cursor)
}

/// Linear reconstruction of `record` at fractional `index`.
pub fn interpolate(record: &[f64], index: f64) -> Option<f64> {
    let last = record.len().checked_sub(1)?;
    let index = index.clamp(0.0, last as f64);
    let lo = index.floor() as usize;
    let hi = (lo + 1).min(last);
    let t = index - lo as f64;
    Some((record[hi] - record[lo]) * t + record[lo])
}

pub fn probe(scale: &BandScale, record: &[f64], cursor: Point) -> Option<Probe> {
    let plot = scale.plot();
    if !is_over_plot(plot, cursor) {
        return None;
    }
    let index = scale.index_at(cursor.x);
    let value = interpolate(record, index)?;
    Some(Probe {
        index,
        value,
        marker: Point::new(cursor.x, scale.y_for(value)),
        fraction: (cursor.x - plot.left) / plot.width,
    })
}

/// Vertical guide through the cursor, spanning the plot height.
pub fn draw_guide<S: Surface>(surface: &mut S, plot: Rect, x: f64, theme: &Theme) {
    let mut pen = surface.scoped();
    pen.set_line_width(theme.guide_width);
    pen.set_stroke_color(theme.guide);
    pen.stroke_segment(Point::new(x, plot.top), Point::new(x, plot.bottom()));
}

/// Filled point on the curve plus the formatted value next to it.
pub fn draw_marker<S: Surface>(surface: &mut S, probe: &Probe, series: &SeriesConfig, layout: &LayoutConfig) {
    let mut pen = surface.scoped();
    pen.set_fill_color(series.color.stroke);
    pen.fill_circle(probe.marker, layout.point_radius);

    // Negative values read below the point so they stay clear of a visible zero line.
    let offset = if series.x_axis.visible && probe.value < 0.0 { 4.0 } else { -4.0 };
    let at = Point::new(probe.marker.x, probe.marker.y + offset * layout.point_radius);
    pen.begin_path();
    pen.set_font(&layout.y_axis.font);
    pen.set_text_align(TextAlign::Center);
    pen.set_text_baseline(TextBaseline::Middle);
    pen.fill_text(&format_value(probe.value, series.y_axis.precision), at);
}

/// Formatted X position below the plot, under the guide line.
pub fn draw_x_readout<S: Surface>(surface: &mut S, layout: &LayoutConfig, fraction: f64, format: &XLabelFormatter) {
    let label = format(fraction);
    let at = Point::new(
        layout.plot_left + layout.plot_width * fraction,
        layout.plot_top + layout.plot_height + layout.plot_top * 0.1,
    );
    let mut pen = surface.scoped();
    pen.begin_path();
    pen.set_text_baseline(TextBaseline::Top);
    pen.set_text_align(TextAlign::Center);
    pen.set_font(&layout.x_axis.font);
    pen.set_fill_color(layout.x_axis.text_color);
    pen.fill_text(&label, at);
}
