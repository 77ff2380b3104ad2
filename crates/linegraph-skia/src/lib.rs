// File: crates/linegraph-skia/src/lib.rs
// Summary: Skia CPU raster backend: implements the engine's `Surface` and exports PNG/RGBA.

mod surface;
pub mod text;

pub use surface::SkiaSurface;
pub use text::TextShaper;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkiaError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("pixel readback failed")]
    Readback,
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
