// File: crates/linegraph-core/src/recording.rs
// Summary: Display-list surface that records every stroke/fill/text with the pen state in effect.
// Notes:
// - Used by the test suite and benches to inspect what the engine drew without a raster backend.
// - Coordinates are recorded in user space; the active transform is captured in `PenState`.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::surface::Surface;
use crate::text::{Font, TextAlign, TextBaseline};

/// 2x3 affine matrix `[a, b, c, d, e, f]` mapping `(x, y)` to `(a x + c y + e, b x + d y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(pub [f64; 6]);

impl Transform {
    pub const IDENTITY: Transform = Transform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.0;
        Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }

    fn then_translate(self, dx: f64, dy: f64) -> Self {
        let [a, b, c, d, e, f] = self.0;
        Transform([a, b, c, d, a * dx + c * dy + e, b * dx + d * dy + f])
    }

    fn then_rotate(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let [a, b, c, d, e, f] = self.0;
        Transform([a * cos + c * sin, b * cos + d * sin, c * cos - a * sin, d * cos - b * sin, e, f])
    }

    /// Rotation component in radians.
    pub fn rotation(&self) -> f64 {
        self.0[1].atan2(self.0[0])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PenState {
    pub stroke: Color,
    pub fill: Color,
    pub line_width: f64,
    pub font: Font,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub transform: Transform,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: Color::BLACK,
            line_width: 1.0,
            font: Font::new(10.0, "sans-serif"),
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
            transform: Transform::IDENTITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathVerb {
    MoveTo(Point),
    LineTo(Point),
    Arc { center: Point, radius: f64, start: f64, end: f64 },
    Close,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(Rect),
    Stroke { path: Vec<PathVerb>, pen: PenState },
    Fill { path: Vec<PathVerb>, pen: PenState },
    Text { text: String, at: Point, pen: PenState },
}

impl Op {
    pub fn path(&self) -> Option<&[PathVerb]> {
        match self {
            Op::Stroke { path, .. } | Op::Fill { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Every point a path visits (arc centers included), in order.
    pub fn points(&self) -> Vec<Point> {
        self.path()
            .unwrap_or_default()
            .iter()
            .filter_map(|v| match *v {
                PathVerb::MoveTo(p) | PathVerb::LineTo(p) => Some(p),
                PathVerb::Arc { center, .. } => Some(center),
                PathVerb::Close => None,
            })
            .collect()
    }

    pub fn pen(&self) -> Option<&PenState> {
        match self {
            Op::Stroke { pen, .. } | Op::Fill { pen, .. } | Op::Text { pen, .. } => Some(pen),
            Op::Clear(_) => None,
        }
    }
}

pub struct RecordingSurface {
    width: f64,
    height: f64,
    pen: PenState,
    stack: Vec<PenState>,
    path: Vec<PathVerb>,
    ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pen: PenState::default(),
            stack: Vec::new(),
            path: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[Op] { &self.ops }
    pub fn pen(&self) -> &PenState { &self.pen }

    /// Number of unmatched `save()` calls.
    pub fn depth(&self) -> usize { self.stack.len() }

    pub fn strokes(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Stroke { .. }))
    }

    pub fn fills(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Fill { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, &PenState)> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { text, at, pen } => Some((text.as_str(), *at, pen)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 { self.width }
    fn height(&self) -> f64 { self.height }

    fn save(&mut self) {
        self.stack.push(self.pen.clone());
    }

    fn restore(&mut self) {
        if let Some(pen) = self.stack.pop() {
            self.pen = pen;
        }
    }

    fn clear_rect(&mut self, rect: Rect) {
        let covers_all = rect.left <= 0.0
            && rect.top <= 0.0
            && rect.right() >= self.width
            && rect.bottom() >= self.height;
        if covers_all {
            self.ops.clear();
        }
        self.ops.push(Op::Clear(rect));
    }

    fn begin_path(&mut self) { self.path.clear(); }
    fn move_to(&mut self, p: Point) { self.path.push(PathVerb::MoveTo(p)); }
    fn line_to(&mut self, p: Point) { self.path.push(PathVerb::LineTo(p)); }
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.path.push(PathVerb::Arc { center, radius, start, end });
    }
    fn close_path(&mut self) { self.path.push(PathVerb::Close); }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke { path: self.path.clone(), pen: self.pen.clone() });
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill { path: self.path.clone(), pen: self.pen.clone() });
    }

    fn set_stroke_color(&mut self, color: Color) { self.pen.stroke = color; }
    fn set_fill_color(&mut self, color: Color) { self.pen.fill = color; }
    fn set_line_width(&mut self, width: f64) { self.pen.line_width = width; }
    fn set_font(&mut self, font: &Font) { self.pen.font = font.clone(); }
    fn set_text_align(&mut self, align: TextAlign) { self.pen.align = align; }
    fn set_text_baseline(&mut self, baseline: TextBaseline) { self.pen.baseline = baseline; }

    fn fill_text(&mut self, text: &str, at: Point) {
        self.ops.push(Op::Text { text: text.to_string(), at, pen: self.pen.clone() });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.pen.transform = self.pen.transform.then_translate(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.pen.transform = self.pen.transform.then_rotate(radians);
    }
}
