// File: crates/linegraph-core/src/layout.rs
// Summary: Surface-wide layout: plot-area margins derived from the surface size, fonts, labels.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Color;
use crate::config::{conform, from_tree, merge, repair_as, to_tree};
use crate::geometry::Rect;
use crate::text::Font;

/// Fraction of the surface width the plot area spans.
pub const PLOT_WIDTH_FRACTION: f64 = 0.8;
/// Fraction of the surface height the plot area spans.
pub const PLOT_HEIGHT_FRACTION: f64 = 0.7;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TitleStyle {
    pub name: String,
    pub color: Color,
    pub font: Font,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self { name: String::new(), color: Color::BLACK, font: Font::medium() }
    }
}

/// Category labels spread along the X axis, e.g. timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XLabelStyle {
    pub values: Vec<String>,
    pub text_color: Color,
    pub font: Font,
}

impl Default for XLabelStyle {
    fn default() -> Self {
        Self { values: Vec::new(), text_color: Color::BLACK, font: Font::small() }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct YLabelStyle {
    pub font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub title: TitleStyle,
    pub x_axis: XLabelStyle,
    pub y_axis: YLabelStyle,
    pub plot_width: f64,
    pub plot_left: f64,
    pub plot_height: f64,
    pub plot_top: f64,
    pub point_radius: f64,
}

impl LayoutConfig {
    /// Default layout for a `width` x `height` surface. The plot leaves three quarters of the
    /// horizontal margin on the left for tick labels and centers vertically.
    pub fn for_size(width: f64, height: f64) -> Self {
        let plot_width = width * PLOT_WIDTH_FRACTION;
        let plot_height = height * PLOT_HEIGHT_FRACTION;
        Self {
            title: TitleStyle::default(),
            x_axis: XLabelStyle::default(),
            y_axis: YLabelStyle::default(),
            plot_width,
            plot_left: (width - plot_width) * 0.75,
            plot_height,
            plot_top: (height - plot_height) / 2.0,
            point_radius: 5.0,
        }
    }

    pub fn plot_area(&self) -> Rect {
        Rect::from_ltwh(self.plot_left, self.plot_top, self.plot_width, self.plot_height)
    }

    /// Deep-merge `partial` over this layout. Fields that do not fit keep their current value.
    pub fn merged(&self, partial: &Value) -> Self {
        let current = to_tree(self);
        let mut tree = current.clone();
        merge(&mut tree, partial);
        conform(&mut tree, &current);
        for pointer in ["/title/color", "/xAxis/textColor"] {
            repair_as::<Color>(&mut tree, pointer, &current);
        }
        for pointer in ["/title/font", "/xAxis/font", "/yAxis/font"] {
            repair_as::<Font>(&mut tree, pointer, &current);
        }
        repair_as::<Vec<String>>(&mut tree, "/xAxis/values", &current);

        let mut next: LayoutConfig = from_tree(tree, || self.clone());
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(next.plot_width) || !positive(next.plot_height) {
            next.plot_width = self.plot_width;
            next.plot_height = self.plot_height;
        }
        if !(next.point_radius.is_finite() && next.point_radius >= 0.0) {
            next.point_radius = self.point_radius;
        }
        next
    }
}
