// File: crates/linegraph-core/src/scale.rs
// Summary: Band scale mapping sample index/value pairs into the plot area, and its inverse for X.

use serde::{Deserialize, Serialize};

use crate::geometry::{clamp, Point, Rect};

/// Closed value interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Min/max of `samples`, or `None` when empty.
    pub fn of(samples: &[f64]) -> Option<Self> {
        let (&first, rest) = samples.split_first()?;
        let mut r = Self::new(first, first);
        for &v in rest {
            if v > r.max {
                r.max = v;
            } else if v < r.min {
                r.min = v;
            }
        }
        Some(r)
    }

    pub fn span(&self) -> f64 { self.max - self.min }
    pub fn is_degenerate(&self) -> bool { self.max == self.min }
    pub fn clamp(&self, v: f64) -> f64 { clamp(v, self.min, self.max) }
}

/// Vertical slice of the plot height a series occupies, as fractions measured from the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const FULL: Band = Band { min: 0.0, max: 1.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.max <= 1.0 && self.max > self.min
    }
}

impl Default for Band {
    fn default() -> Self { Self::FULL }
}

/// Maps `(index, value)` of one series into pixel space within its band.
///
/// The value domain is the fixed range when one is configured, else the series extent.
/// A series whose extent is a single value is drawn on the constant path (see [`BandScale::constant_y`]).
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    plot: Rect,
    band: Band,
    extent: ValueRange,
    fixed: Option<ValueRange>,
    samples: usize,
}

impl BandScale {
    pub fn new(plot: Rect, band: Band, extent: ValueRange, fixed: Option<ValueRange>, samples: usize) -> Self {
        Self { plot, band, extent, fixed, samples }
    }

    pub fn plot(&self) -> Rect { self.plot }
    pub fn extent(&self) -> ValueRange { self.extent }
    pub fn fixed(&self) -> Option<ValueRange> { self.fixed }
    pub fn domain(&self) -> ValueRange { self.fixed.unwrap_or(self.extent) }
    pub fn is_constant(&self) -> bool { self.extent.is_degenerate() }

    /// Pixel row of band fraction `band.min`.
    pub fn band_bottom(&self) -> f64 {
        self.plot.bottom() - self.plot.height * self.band.min
    }

    /// Pixel row of band fraction `band.max`.
    pub fn band_top(&self) -> f64 {
        self.plot.bottom() - self.plot.height * self.band.max
    }

    pub fn band_height(&self) -> f64 {
        self.plot.height * (self.band.max - self.band.min)
    }

    pub fn band_middle(&self) -> f64 {
        self.band_bottom() - self.band_height() / 2.0
    }

    pub fn x_at(&self, index: f64) -> f64 {
        if self.samples < 2 {
            return self.plot.left;
        }
        self.plot.left + index * self.plot.width / (self.samples - 1) as f64
    }

    /// Row of a constant series: band middle for negative values, band bottom otherwise.
    pub fn constant_y(&self) -> f64 {
        if self.extent.max < 0.0 { self.band_middle() } else { self.band_bottom() }
    }

    /// Row of `value` on the domain line, without clamping.
    fn project(&self, value: f64) -> f64 {
        let d = self.domain();
        self.band_bottom() - (value - d.min) * self.band_height() / d.span()
    }

    /// Row a sample is drawn at; fixed ranges clamp the value first.
    pub fn y_for(&self, value: f64) -> f64 {
        if self.is_constant() {
            return self.constant_y();
        }
        match self.fixed {
            Some(range) => self.project(range.clamp(value)),
            None => self.project(value),
        }
    }

    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.x_at(index as f64), self.y_for(value))
    }

    /// Row of the value zero; may lie outside the band.
    pub fn zero_y(&self) -> f64 {
        if self.is_constant() { self.constant_y() } else { self.project(0.0) }
    }

    pub fn zero_in_band(&self) -> bool {
        let y = self.zero_y();
        y >= self.band_top() && y <= self.band_bottom()
    }

    /// Row the area fill closes at: `baseline` (or zero) clamped into the band.
    pub fn shadow_y(&self, baseline: Option<f64>) -> f64 {
        let y = match baseline {
            Some(v) if !self.is_constant() => self.project(v),
            _ => self.zero_y(),
        };
        clamp(y, self.band_top(), self.band_bottom())
    }

    /// Fractional sample index under pixel column `x`.
    pub fn index_at(&self, x: f64) -> f64 {
        if self.samples < 2 {
            return 0.0;
        }
        (x - self.plot.left) * (self.samples - 1) as f64 / self.plot.width
    }
}
