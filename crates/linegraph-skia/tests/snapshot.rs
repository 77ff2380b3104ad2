// File: crates/linegraph-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic two-band graph (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips only the golden comparison.
// - Always checks the decoded image: size, backdrop, and both curve colors present.

use linegraph_core::{Color, LineGraph, Point, SeriesConfig};
use linegraph_skia::SkiaSurface;

fn render_bytes() -> Vec<u8> {
    let surface = SkiaSurface::new(400, 240).expect("raster surface").with_backdrop(Color::WHITE);
    let mut graph = LineGraph::new(surface);

    let cube: Vec<f64> = (0..50).map(|i| (i as f64).powi(3)).collect();
    let wave: Vec<f64> = (0..50).map(|i| (i as f64 * 0.25).sin()).collect();
    // Tick labels off to avoid text nondeterminism across platforms
    let top = SeriesConfig::new(cube).with_band(0.6, 1.0).with_ticks(0, 0);
    let bottom = SeriesConfig::new(wave)
        .with_band(0.0, 0.4)
        .with_ticks(0, 0)
        .with_colors(Color::rgb(150, 0, 150), Color::rgb(150, 0, 150).with_alpha_f(0.2));
    graph.draw(&top, Some(Point::new(200.0, 120.0)));
    graph.draw(&bottom, None);

    graph.into_surface().to_png_bytes().expect("png bytes")
}

#[test]
fn golden_two_band_graph() {
    let bytes = render_bytes();

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (400, 240));
    assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 255], "backdrop should be opaque white");
    // Strong stroke colors only appear on the curves, not in the pale fills or gray grid.
    let blue = img.pixels().filter(|p| p.0[2] > 200 && p.0[0] < 60 && p.0[1] < 60).count();
    let purple = img.pixels().filter(|p| p.0[0] > 110 && p.0[2] > 110 && p.0[1] < 50).count();
    assert!(blue > 50, "cube curve missing ({blue} blue pixels)");
    assert!(purple > 50, "wave curve missing ({purple} purple pixels)");
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("two_band_graph.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}
