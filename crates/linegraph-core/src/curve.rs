// File: crates/linegraph-core/src/curve.rs
// Summary: Curve renderer: stroked polyline (or constant line) plus the translucent area fill.

use crate::geometry::Point;
use crate::scale::BandScale;
use crate::series::SeriesConfig;
use crate::surface::Surface;
use crate::theme::Theme;

/// Stroke the series and fill the area between it and the shadow baseline.
pub fn draw_curve<S: Surface>(surface: &mut S, scale: &BandScale, series: &SeriesConfig, theme: &Theme) {
    let plot = scale.plot();
    let mut pen = surface.scoped();
    pen.begin_path();
    pen.set_line_width(theme.curve_width);
    pen.set_stroke_color(series.color.stroke);
    pen.set_fill_color(series.color.shadow);

    if scale.is_constant() {
        let y = scale.constant_y();
        pen.move_to(Point::new(plot.left, y));
        pen.line_to(Point::new(plot.right(), y));
    } else {
        for (i, &v) in series.record.iter().enumerate() {
            let p = scale.point(i, v);
            if i == 0 {
                pen.move_to(p);
            } else {
                pen.line_to(p);
            }
        }
    }
    pen.stroke();

    // The stroked path is reused as the top edge of the fill.
    let base = scale.shadow_y(series.shadow_baseline);
    pen.line_to(Point::new(plot.right(), base));
    pen.line_to(Point::new(plot.left, base));
    pen.close_path();
    pen.fill();
}
