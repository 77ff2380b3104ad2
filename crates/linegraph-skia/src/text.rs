// File: crates/linegraph-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; resolves CSS-style font requests with fallbacks.

use linegraph_core::text::{TextAlign, TextBaseline};
use linegraph_core::{Font, Point};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

const SANS_FALLBACK: [&str; 6] = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const MONO_FALLBACK: [&str; 5] = ["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];
const SERIF_FALLBACK: [&str; 4] = ["Times New Roman", "Georgia", "DejaVu Serif", "serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    /// Requested families first (CSS list syntax), then the fallbacks for their generic kind.
    fn families(requested: &str) -> Vec<String> {
        let mut out: Vec<String> = requested
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        let lower = requested.to_ascii_lowercase();
        let fallback: &[&str] = if lower.contains("mono") {
            &MONO_FALLBACK
        } else if lower.contains("serif") && !lower.contains("sans") {
            &SERIF_FALLBACK
        } else {
            &SANS_FALLBACK
        };
        out.extend(fallback.iter().map(|f| f.to_string()));
        out
    }

    fn make_style(font: &Font, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size((font.size as f32).max(1.0));
        ts.set_color(color);
        ts.set_font_families(&Self::families(&font.family));
        if font.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, font: &Font, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` so that `at` is its anchor for the given align/baseline.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        at: Point,
        font: &Font,
        color: skia::Color,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let p = self.layout(text, font, color);
        let width = p.longest_line();
        let x = at.x as f32
            - match align {
                TextAlign::Left => 0.0,
                TextAlign::Center => width / 2.0,
                TextAlign::Right => width,
            };
        // Paragraph paints from its top-left corner.
        let y = at.y as f32
            - match baseline {
                TextBaseline::Top => 0.0,
                TextBaseline::Middle => p.height() / 2.0,
                TextBaseline::Alphabetic => p.alphabetic_baseline(),
                TextBaseline::Bottom => p.height(),
            };
        p.paint(canvas, (x, y));
    }
}
