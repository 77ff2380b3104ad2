// File: crates/linegraph-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use linegraph_core::{LineGraph, Point, SeriesConfig};
use linegraph_skia::SkiaSurface;
use serde_json::json;

#[test]
fn render_smoke_png() {
    let surface = SkiaSurface::new(640, 320).expect("raster surface");
    let mut graph = LineGraph::new(surface);
    graph.set_config(&json!({
        "title": { "name": "Smoke" },
        "xAxis": { "values": ["a", "b", "c"] }
    }));
    let series = SeriesConfig::new(vec![0.0, 2.0, 1.0, 3.5, 2.5])
        .with_ticks(3, 1)
        .with_title("Y", true);
    graph.draw(&series, Some(Point::new(300.0, 150.0)));

    let mut surface = graph.into_surface();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    surface.write_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = surface.to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (640, 320));
}
