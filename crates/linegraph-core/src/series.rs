// File: crates/linegraph-core/src/series.rs
// Summary: Per-draw series configuration, its defaults, and the repair pass applied before drawing.
// Notes:
// - The JSON shape (camelCase keys) is the partial-config format accepted by `LineGraph::draw_partial`.
// - Nothing here rejects a config: every invalid field falls back to its documented default.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::color::Color;
use crate::config::{conform, from_tree, merge, repair_as, reset_field, to_tree};
use crate::scale::{Band, ValueRange};
use crate::ticks::{Rounding, MAX_PRECISION};

/// Most tick labels a series may ask for.
pub const MAX_TICK_LINES: u32 = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesColors {
    pub stroke: Color,
    pub shadow: Color,
    /// Zero-line color; falls back to `xAxis.color` when absent.
    #[serde(default)]
    pub axis: Option<Color>,
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self {
            stroke: Color::rgb(0, 0, 255),
            shadow: Color::rgb(0, 100, 255).with_alpha_f(0.15),
            axis: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YAxisConfig {
    /// Number of tick labels; below 2 disables them.
    pub lines: u32,
    pub precision: u32,
    pub title: String,
    pub vertical_title: bool,
    pub rounding: Rounding,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self { lines: 2, precision: 0, title: String::new(), vertical_title: false, rounding: Rounding::Precision }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XAxisConfig {
    pub visible: bool,
    pub color: Color,
    pub width: f64,
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self { visible: true, color: Color::BLACK, width: 1.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub fixed: bool,
    pub min: f64,
    pub max: f64,
}

impl RangeConfig {
    pub fn fixed(min: f64, max: f64) -> Self {
        Self { fixed: true, min, max }
    }

    /// The configured interval when the range is fixed.
    pub fn as_fixed(&self) -> Option<ValueRange> {
        self.fixed.then(|| ValueRange::new(self.min, self.max))
    }

    fn is_valid(&self) -> bool {
        !self.fixed || (self.min.is_finite() && self.max.is_finite() && self.max > self.min)
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self { fixed: false, min: 0.0, max: 100.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesConfig {
    pub record: Vec<f64>,
    pub height: Band,
    pub color: SeriesColors,
    pub y_axis: YAxisConfig,
    pub x_axis: XAxisConfig,
    pub range: RangeConfig,
    /// Value the area fill closes at; the zero line when absent.
    pub shadow_baseline: Option<f64>,
}

impl SeriesConfig {
    pub fn new(record: Vec<f64>) -> Self {
        Self { record, ..Self::default() }
    }

    pub fn with_band(mut self, min: f64, max: f64) -> Self {
        self.height = Band::new(min, max);
        self
    }

    pub fn with_colors(mut self, stroke: Color, shadow: Color) -> Self {
        self.color.stroke = stroke;
        self.color.shadow = shadow;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = RangeConfig::fixed(min, max);
        self
    }

    pub fn with_ticks(mut self, lines: u32, precision: u32) -> Self {
        self.y_axis.lines = lines;
        self.y_axis.precision = precision;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>, vertical: bool) -> Self {
        self.y_axis.title = title.into();
        self.y_axis.vertical_title = vertical;
        self
    }

    /// Overlay a partial JSON config on the defaults and repair whatever does not fit.
    pub fn from_partial(partial: &Value) -> Self {
        let defaults = to_tree(&SeriesConfig::default());
        let mut tree = defaults.clone();
        merge(&mut tree, partial);
        conform(&mut tree, &defaults);

        // Stroke and shadow are only taken as a pair.
        let stroke_bad = repair_as::<Color>(&mut tree, "/color/stroke", &defaults);
        let shadow_bad = repair_as::<Color>(&mut tree, "/color/shadow", &defaults);
        if stroke_bad != shadow_bad {
            reset_field(&mut tree, "/color/stroke", &defaults);
            reset_field(&mut tree, "/color/shadow", &defaults);
        }
        repair_as::<Option<Color>>(&mut tree, "/color/axis", &defaults);
        repair_as::<Color>(&mut tree, "/xAxis/color", &defaults);
        repair_as::<Rounding>(&mut tree, "/yAxis/rounding", &defaults);
        repair_as::<Option<f64>>(&mut tree, "/shadowBaseline", &defaults);
        repair_as::<Vec<f64>>(&mut tree, "/record", &defaults);

        let config: SeriesConfig = from_tree(tree, SeriesConfig::default);
        config.sanitized().into_owned()
    }

    fn is_sound(&self) -> bool {
        record_is_finite(&self.record)
            && self.height.is_valid()
            && self.y_axis.lines <= MAX_TICK_LINES
            && self.y_axis.precision <= MAX_PRECISION
            && width_is_valid(self.x_axis.width)
            && self.range.is_valid()
            && self.shadow_baseline.map_or(true, f64::is_finite)
    }

    /// Replace invalid fields by their defaults; returns how many were replaced.
    pub fn repair(&mut self) -> usize {
        let defaults = SeriesConfig::default();
        let mut repaired = 0;
        let mut note = |field: &str| {
            debug!(field, "series field replaced by default");
            repaired += 1;
        };
        if !record_is_finite(&self.record) {
            note("record");
            self.record = defaults.record;
        }
        if !self.height.is_valid() {
            note("height");
            self.height = defaults.height;
        }
        if self.y_axis.lines > MAX_TICK_LINES {
            note("yAxis.lines");
            self.y_axis.lines = defaults.y_axis.lines;
        }
        if self.y_axis.precision > MAX_PRECISION {
            note("yAxis.precision");
            self.y_axis.precision = defaults.y_axis.precision;
        }
        if !width_is_valid(self.x_axis.width) {
            note("xAxis.width");
            self.x_axis.width = defaults.x_axis.width;
        }
        if !self.range.is_valid() {
            note("range");
            self.range = defaults.range;
        }
        if self.shadow_baseline.is_some_and(|v| !v.is_finite()) {
            note("shadowBaseline");
            self.shadow_baseline = None;
        }
        repaired
    }

    /// This config with invalid fields replaced by defaults; borrows when nothing needs fixing.
    pub fn sanitized(&self) -> Cow<'_, SeriesConfig> {
        if self.is_sound() {
            return Cow::Borrowed(self);
        }
        let mut fixed = self.clone();
        fixed.repair();
        Cow::Owned(fixed)
    }

    /// Zero-line color.
    pub fn axis_color(&self) -> Color {
        self.color.axis.unwrap_or(self.x_axis.color)
    }
}

fn record_is_finite(record: &[f64]) -> bool {
    record.iter().all(|v| v.is_finite())
}

fn width_is_valid(width: f64) -> bool {
    width.is_finite() && width > 0.0
}
