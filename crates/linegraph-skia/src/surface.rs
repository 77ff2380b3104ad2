// File: crates/linegraph-skia/src/surface.rs
// Summary: `Surface` over a Skia raster surface; pen state mirrors the canvas save/restore stack.

use std::f64::consts::TAU;
use std::path::Path;

use linegraph_core::text::{TextAlign, TextBaseline};
use linegraph_core::{Color, Font, Point, Rect, Surface};
use skia_safe as skia;
use tracing::debug;

use crate::text::TextShaper;
use crate::SkiaError;

#[derive(Clone, Debug)]
struct Pen {
    stroke: Color,
    fill: Color,
    line_width: f64,
    font: Font,
    align: TextAlign,
    baseline: TextBaseline,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: Color::BLACK,
            line_width: 1.0,
            font: Font::new(10.0, "sans-serif"),
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

/// CPU raster surface. Starts fully transparent; set a backdrop to flatten exports onto a color.
pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    backdrop: Option<Color>,
    pen: Pen,
    stack: Vec<Pen>,
    path: skia::Path,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self, SkiaError> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(SkiaError::Surface { width, height })?;
        surface.canvas().clear(skia::Color::TRANSPARENT);
        debug!(width, height, "raster surface created");
        Ok(Self {
            surface,
            width,
            height,
            backdrop: None,
            pen: Pen::default(),
            stack: Vec::new(),
            path: skia::Path::new(),
            shaper: TextShaper::new(),
        })
    }

    /// Color the exported image is composited onto (the page behind the canvas).
    pub fn with_backdrop(mut self, color: Color) -> Self {
        self.backdrop = Some(color);
        self
    }

    /// Current pixels composited onto the backdrop, as a fresh raster surface.
    fn flattened(&mut self) -> Result<skia::Surface, SkiaError> {
        let (width, height) = (self.width, self.height);
        let image = self.surface.image_snapshot();
        let mut flat = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(SkiaError::Surface { width, height })?;
        let canvas = flat.canvas();
        canvas.clear(to_skia(self.backdrop.unwrap_or(Color::TRANSPARENT)));
        canvas.draw_image(&image, skia::Point::new(0.0, 0.0), None);
        Ok(flat)
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>, SkiaError> {
        let image = self.flattened()?.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SkiaError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, output_png_path: impl AsRef<Path>) -> Result<(), SkiaError> {
        let bytes = self.to_png_bytes()?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "png written");
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize), SkiaError> {
        let (width, height) = (self.width, self.height);
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !self.flattened()?.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(SkiaError::Readback);
        }
        Ok((pixels, width as u32, height as u32, stride))
    }

    fn paint(&self, color: Color, style: skia::paint::Style) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia(color));
        paint.set_style(style);
        if style == skia::paint::Style::Stroke {
            paint.set_stroke_width(self.pen.line_width as f32);
        }
        paint
    }
}

impl Surface for SkiaSurface {
    fn width(&self) -> f64 { self.width as f64 }
    fn height(&self) -> f64 { self.height as f64 }

    fn save(&mut self) {
        self.stack.push(self.pen.clone());
        self.surface.canvas().save();
    }

    fn restore(&mut self) {
        if let Some(pen) = self.stack.pop() {
            self.pen = pen;
            self.surface.canvas().restore();
        }
    }

    fn clear_rect(&mut self, rect: Rect) {
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        let r = skia::Rect::from_xywh(rect.left as f32, rect.top as f32, rect.width as f32, rect.height as f32);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(pt(p));
    }

    fn line_to(&mut self, p: Point) {
        self.path.line_to(pt(p));
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        let sweep = end - start;
        if sweep.abs() >= TAU {
            self.path.add_circle(pt(center), radius as f32, None);
            return;
        }
        let r = radius as f32;
        let oval = skia::Rect::from_xywh(center.x as f32 - r, center.y as f32 - r, 2.0 * r, 2.0 * r);
        self.path.arc_to(oval, start.to_degrees() as f32, sweep.to_degrees() as f32, false);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) {
        let paint = self.paint(self.pen.stroke, skia::paint::Style::Stroke);
        self.surface.canvas().draw_path(&self.path, &paint);
    }

    fn fill(&mut self) {
        let paint = self.paint(self.pen.fill, skia::paint::Style::Fill);
        self.surface.canvas().draw_path(&self.path, &paint);
    }

    fn set_stroke_color(&mut self, color: Color) { self.pen.stroke = color; }
    fn set_fill_color(&mut self, color: Color) { self.pen.fill = color; }
    fn set_line_width(&mut self, width: f64) { self.pen.line_width = width; }
    fn set_font(&mut self, font: &Font) { self.pen.font = font.clone(); }
    fn set_text_align(&mut self, align: TextAlign) { self.pen.align = align; }
    fn set_text_baseline(&mut self, baseline: TextBaseline) { self.pen.baseline = baseline; }

    fn fill_text(&mut self, text: &str, at: Point) {
        let Pen { fill, font, align, baseline, .. } = &self.pen;
        let canvas = self.surface.canvas();
        self.shaper.draw_anchored(canvas, text, at, font, to_skia(*fill), *align, *baseline);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.surface.canvas().translate((dx as f32, dy as f32));
    }

    fn rotate(&mut self, radians: f64) {
        self.surface.canvas().rotate(radians.to_degrees() as f32, None);
    }
}
