// File: crates/linegraph-core/src/chart.rs
// Summary: LineGraph engine: owns the surface, the layout, cursor memory and per-frame state.

use serde_json::Value;
use tracing::{debug, trace};

use crate::axis::{draw_category_labels, draw_chart_title, draw_grid, draw_y_ticks, draw_y_title, draw_zero_line};
use crate::curve::draw_curve;
use crate::geometry::{Point, Rect};
use crate::interaction::{draw_guide, draw_marker, draw_x_readout, probe, Probe, XLabelFormatter};
use crate::layout::LayoutConfig;
use crate::scale::{BandScale, ValueRange};
use crate::series::SeriesConfig;
use crate::surface::Surface;
use crate::theme::Theme;

/// Things drawn at most once between two `clear()` calls, however many series are drawn.
#[derive(Clone, Copy, Debug, Default)]
struct FrameState {
    guide_drawn: bool,
    decorations_drawn: bool,
}

/// Renders banded line series onto one surface.
///
/// Call [`LineGraph::draw`] once per series per frame and [`LineGraph::clear`] between frames.
/// The surface size is read once at construction; build a new engine when it changes.
pub struct LineGraph<S: Surface> {
    surface: S,
    layout: LayoutConfig,
    theme: Theme,
    x_formatter: Option<XLabelFormatter>,
    cursor: Option<Point>,
    frame: FrameState,
}

impl<S: Surface> LineGraph<S> {
    pub fn new(surface: S) -> Self {
        Self::build(surface, None)
    }

    /// Engine whose hover readout also shows `format(fraction)` under the plot.
    pub fn with_x_formatter(surface: S, format: impl Fn(f64) -> String + 'static) -> Self {
        Self::build(surface, Some(Box::new(format)))
    }

    fn build(surface: S, x_formatter: Option<XLabelFormatter>) -> Self {
        let layout = LayoutConfig::for_size(surface.width(), surface.height());
        let mut graph = Self {
            surface,
            layout,
            theme: Theme::default(),
            x_formatter,
            cursor: None,
            frame: FrameState::default(),
        };
        draw_grid(&mut graph.surface, graph.layout.plot_area(), &graph.theme);
        graph
    }

    /// Deep-merge a partial layout (title, fonts, colors, category labels, margins).
    pub fn set_config(&mut self, partial: &Value) {
        self.layout = self.layout.merged(partial);
    }

    /// Takes effect from the next `clear()` for the grid, immediately for everything else.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn layout(&self) -> &LayoutConfig { &self.layout }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn plot_area(&self) -> Rect { self.layout.plot_area() }

    /// Last remembered cursor position.
    pub fn cursor(&self) -> Option<Point> { self.cursor }

    /// True once a cursor position has been supplied and until [`LineGraph::reset`].
    pub fn is_tracking(&self) -> bool { self.cursor.is_some() }

    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn into_surface(self) -> S { self.surface }

    /// Overlay `partial` on the series defaults, then draw it.
    pub fn draw_partial(&mut self, partial: &Value, cursor: Option<Point>) {
        let series = SeriesConfig::from_partial(partial);
        self.draw(&series, cursor);
    }

    /// Draw one series. `cursor = None` reuses the remembered cursor position.
    pub fn draw(&mut self, series: &SeriesConfig, cursor: Option<Point>) {
        if cursor.is_some() {
            self.cursor = cursor;
        }
        let series = series.sanitized();
        let Some(scale) = self.scale_for(&series) else {
            debug!("empty record; nothing drawn");
            return;
        };
        trace!(
            samples = series.record.len(),
            min = scale.extent().min,
            max = scale.extent().max,
            fixed = series.range.fixed,
            "drawing series"
        );

        let mut pen = self.surface.scoped();
        let surface = &mut *pen;
        draw_curve(surface, &scale, &series, &self.theme);
        draw_zero_line(surface, &scale, &series);
        if !self.frame.decorations_drawn {
            draw_chart_title(surface, &self.layout);
            draw_category_labels(surface, &self.layout);
            self.frame.decorations_drawn = true;
        }
        draw_y_ticks(surface, &scale, &series, &self.layout);
        draw_y_title(surface, &scale, &series, &self.layout);

        let Some(hit) = self.cursor.and_then(|c| probe(&scale, &series.record, c)) else {
            return;
        };
        if !self.frame.guide_drawn {
            draw_guide(surface, scale.plot(), hit.marker.x, &self.theme);
            if let Some(format) = &self.x_formatter {
                draw_x_readout(surface, &self.layout, hit.fraction, format);
            }
            self.frame.guide_drawn = true;
        }
        draw_marker(surface, &hit, &series, &self.layout);
    }

    /// What the cursor would read on `series`, without drawing.
    pub fn probe(&self, series: &SeriesConfig, cursor: Point) -> Option<Probe> {
        let series = series.sanitized();
        let scale = self.scale_for(&series)?;
        probe(&scale, &series.record, cursor)
    }

    /// Band scale for a sanitized series; `None` when its record is empty.
    pub fn scale_for(&self, series: &SeriesConfig) -> Option<BandScale> {
        let extent = ValueRange::of(&series.record)?;
        Some(BandScale::new(
            self.layout.plot_area(),
            series.height,
            extent,
            series.range.as_fixed(),
            series.record.len(),
        ))
    }

    /// Wipe the surface and redraw the grid. The remembered cursor is kept.
    pub fn clear(&mut self) {
        let (w, h) = (self.surface.width(), self.surface.height());
        self.surface.clear_rect(Rect::from_ltwh(0.0, 0.0, w, h));
        draw_grid(&mut self.surface, self.layout.plot_area(), &self.theme);
        self.frame = FrameState::default();
    }

    /// Clear and forget the cursor.
    pub fn reset(&mut self) {
        self.clear();
        self.cursor = None;
    }
}
