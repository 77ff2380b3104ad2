// File: crates/linegraph-core/src/lib.rs
// Summary: Core library entry point; exports the banded line graph engine and its building blocks.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod curve;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod recording;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod ticks;

pub use chart::LineGraph;
pub use color::Color;
pub use geometry::{Point, Rect};
pub use interaction::{Probe, XLabelFormatter};
pub use layout::LayoutConfig;
pub use recording::RecordingSurface;
pub use scale::{Band, BandScale, ValueRange};
pub use series::SeriesConfig;
pub use surface::{PenScope, Surface};
pub use text::{Font, TextAlign, TextBaseline};
pub use theme::Theme;
pub use ticks::Rounding;
