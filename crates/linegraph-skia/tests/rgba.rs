// File: crates/linegraph-skia/tests/rgba.rs
// Purpose: Validate RGBA readback buffer shape, backdrop flattening and the translucent area fill.

use linegraph_core::{Color, LineGraph, SeriesConfig};
use linegraph_skia::SkiaSurface;

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    // 1000x500 puts the plot at left 150, top 75, 800x350.
    let mut graph = LineGraph::new(SkiaSurface::new(1000, 500).expect("raster surface"));
    graph.draw(&SeriesConfig::new(vec![0.0, 100.0]).with_ticks(0, 0), None);
    let mut surface = graph.into_surface();

    let (px, w, h, stride) = surface.to_rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Outside the plot nothing was drawn.
    assert_eq!(pixel(&px, stride, 2, 2)[3], 0);
    // Under the curve, between grid lines, only the translucent shadow is painted.
    let shade = pixel(&px, stride, 750, 415);
    assert!(shade[3] > 0 && shade[3] < 255, "shadow alpha {}", shade[3]);
    assert!(shade[2] > shade[0], "shadow should be blue-ish: {shade:?}");
}

#[test]
fn backdrop_flattens_exports() {
    let surface = SkiaSurface::new(200, 100).expect("raster surface").with_backdrop(Color::WHITE);
    let mut surface = LineGraph::new(surface).into_surface();
    let (px, _, _, stride) = surface.to_rgba8().expect("rgba render");
    assert_eq!(pixel(&px, stride, 1, 1), [255, 255, 255, 255]);
}
