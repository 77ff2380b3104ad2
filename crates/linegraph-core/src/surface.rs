// File: crates/linegraph-core/src/surface.rs
// Summary: Stateful-pen drawing surface trait and the scoped save/restore guard.

use std::f64::consts::TAU;
use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::text::{Font, TextAlign, TextBaseline};

/// A raster surface driven through a stateful pen, in the style of a 2D canvas context.
///
/// Pen state (stroke/fill color, line width, font, text anchoring, transform) is pushed by
/// [`Surface::save`] and popped by [`Surface::restore`]. The current path is not pen state:
/// it survives a restore and is only reset by [`Surface::begin_path`].
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn save(&mut self);
    fn restore(&mut self);

    /// Reset the pixels under `rect` to fully transparent.
    fn clear_rect(&mut self, rect: Rect);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    /// Circular arc, angles in radians clockwise from +X; joined to the current point by a line.
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &Font);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    /// Fill `text` anchored at `at` using the current font, fill color, align and baseline.
    fn fill_text(&mut self, text: &str, at: Point);

    fn translate(&mut self, dx: f64, dy: f64);
    /// Rotate the current transform by `radians`, clockwise in pixel space.
    fn rotate(&mut self, radians: f64);

    /// Save the pen and hand back a guard that restores it when dropped.
    fn scoped(&mut self) -> PenScope<'_, Self>
    where
        Self: Sized,
    {
        PenScope::new(self)
    }

    /// Stroke a single segment as its own path.
    fn stroke_segment(&mut self, from: Point, to: Point) {
        self.begin_path();
        self.move_to(from);
        self.line_to(to);
        self.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.begin_path();
        self.arc(center, radius, 0.0, TAU);
        self.fill();
    }
}

/// RAII pen scope: `save()` on creation, `restore()` on drop.
pub struct PenScope<'a, S: Surface> {
    surface: &'a mut S,
}

impl<'a, S: Surface> PenScope<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface> Deref for PenScope<'_, S> {
    type Target = S;
    fn deref(&self) -> &S { self.surface }
}

impl<S: Surface> DerefMut for PenScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S { self.surface }
}

impl<S: Surface> Drop for PenScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
