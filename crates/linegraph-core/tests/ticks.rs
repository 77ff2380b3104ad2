// File: crates/linegraph-core/tests/ticks.rs
// Purpose: Validate nice-bound rounding, tick spacing, value formatting and y tick labels.

mod common;

use common::*;
use linegraph_core::text::{TextAlign, TextBaseline};
use linegraph_core::ticks::{
    ceil_at, ceil_significant, floor_at, floor_significant, format_value, linspace, nice_bounds, tick_values,
};
use linegraph_core::{Rounding, SeriesConfig, ValueRange};

const SAMPLES: [f64; 15] = [
    0.0,
    0.07,
    -0.123,
    1.005,
    42.0,
    99.99,
    -1234.5678,
    970_299.0,
    3.0e-4,
    // Just past an integer once scaled; rounding must not pull them back inside.
    2.0000000001,
    1.9999999999,
    -2.0000000001,
    1_000_000.0005,
    12_345_678.904,
    0.3,
];

#[test]
fn precision_rounding_encloses_and_is_idempotent() {
    for &v in &SAMPLES {
        for p in 0..5 {
            let lo = floor_at(v, p);
            let hi = ceil_at(v, p);
            assert!(lo <= v && v <= hi, "{v} at {p}: [{lo}, {hi}]");
            assert_eq!(floor_at(lo, p), lo, "floor not idempotent for {v} at {p}");
            assert_eq!(ceil_at(hi, p), hi, "ceil not idempotent for {v} at {p}");
        }
    }
}

#[test]
fn precision_rounding_known_values() {
    assert_eq!(floor_at(0.123, 2), 0.12);
    assert_eq!(ceil_at(0.456, 2), 0.46);
    assert_eq!(floor_at(-0.123, 2), -0.13);
    assert_eq!(floor_at(0.07, 2), 0.07);
    assert_eq!(ceil_at(41.2, 0), 42.0);
}

#[test]
fn nice_bounds_enclose_large_values_just_past_a_step() {
    let nice = nice_bounds(ValueRange::new(0.0, 12_345_678.904), 2, Rounding::Precision);
    assert!(nice.max >= 12_345_678.904, "nice max {} below data", nice.max);
    assert_eq!(nice.max, 12_345_678.91);
    assert_eq!(ceil_at(1_000_000.0005, 0), 1_000_001.0);
    assert_eq!(ceil_at(2.0000000001, 0), 3.0);
    assert_eq!(floor_at(1.9999999999, 0), 1.0);
    // Float noise from scaling still lands on the intended step.
    assert_eq!(ceil_at(0.3, 1), 0.3);
    assert_eq!(floor_at(0.29, 2), 0.29);
}

#[test]
fn significant_rounding_survives_tiny_and_huge_magnitudes() {
    for v in [1e-320, 5e-310, -1e-320, 1.7e308, -1.7e308] {
        let lo = floor_significant(v);
        let hi = ceil_significant(v);
        assert!(lo.is_finite() && hi.is_finite(), "{v}: [{lo}, {hi}]");
        assert!(lo <= v && v <= hi, "{v}: [{lo}, {hi}]");
    }
}

#[test]
fn significant_rounding_keeps_two_digits() {
    assert_eq!(floor_significant(1234.0), 1200.0);
    assert_eq!(ceil_significant(1234.0), 1300.0);
    assert_eq!(floor_significant(-1234.0), -1300.0);
    assert_eq!(ceil_significant(0.0456), 0.046);
    assert_eq!(floor_significant(0.0), 0.0);

    let nice = nice_bounds(ValueRange::new(1234.0, 5678.0), 0, Rounding::Significant);
    assert_eq!(nice, ValueRange::new(1200.0, 5700.0));
    for &v in &SAMPLES {
        let lo = floor_significant(v);
        let hi = ceil_significant(v);
        assert!(lo <= v && v <= hi, "{v}: [{lo}, {hi}]");
        assert_eq!(floor_significant(lo), lo);
    }
}

#[test]
fn ticks_are_evenly_spaced_between_nice_bounds() {
    assert!(tick_values(ValueRange::new(0.0, 1.0), 1).is_empty());
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);

    let ticks = tick_values(ValueRange::new(0.0, 100.0), 5);
    assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn format_value_is_fixed_point_without_negative_zero() {
    assert_eq!(format_value(3.14159, 2), "3.14");
    assert_eq!(format_value(42.0, 0), "42");
    assert_eq!(format_value(-0.0001, 2), "0.00");
    assert_eq!(format_value(-0.0, 0), "0");
    assert_eq!(format_value(-12.5, 1), "-12.5");
}

#[test]
fn tick_labels_span_the_band_left_of_plot() {
    let series = SeriesConfig::new(vec![0.123, 0.456]).with_ticks(3, 2);
    let mut graph = graph();
    graph.draw(&series, None);

    let labels: Vec<_> = graph
        .surface()
        .texts()
        .filter(|(_, _, pen)| pen.align == TextAlign::Right)
        .map(|(t, at, pen)| {
            assert_eq!(pen.baseline, TextBaseline::Middle);
            assert_eq!(pen.fill, series.color.stroke);
            (t.to_string(), at)
        })
        .collect();
    let text: Vec<&str> = labels.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(text, ["0.12", "0.29", "0.46"]);
    for (i, (_, at)) in labels.iter().enumerate() {
        assert_close(at.x, PLOT_LEFT * 0.9);
        assert_close(at.y, row(i as f64 * 0.5));
    }
}

#[test]
fn fewer_than_two_lines_draws_no_labels() {
    let series = SeriesConfig::new(vec![1.0, 2.0]).with_ticks(1, 0);
    let mut graph = graph();
    graph.draw(&series, None);
    assert_eq!(graph.surface().texts().count(), 0);
}

#[test]
fn constant_series_gets_a_single_label_on_its_line() {
    let series = SeriesConfig::new(vec![-2.5; 3]).with_band(0.0, 0.5).with_ticks(4, 1);
    let mut graph = graph();
    graph.draw(&series, None);
    let labels = texts(graph.surface());
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].0, "-2.5");
    assert_close(labels[0].1.y, row(0.25));
}
