// File: crates/demo/src/main.rs
// Summary: Testbench: draws a cube series and a sine (or CSV column) series in stacked bands to a PNG.

use anyhow::{Context, Result};
use chrono::{NaiveTime, TimeDelta};
use linegraph_core::{Color, LineGraph, Point};
use linegraph_skia::SkiaSurface;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const SAMPLES: usize = 100;

struct Args {
    csv: Option<PathBuf>,
    cursor: Option<Point>,
    out: PathBuf,
    width: i32,
    height: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,linegraph_core=debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let lower = match &args.csv {
        Some(path) => load_column(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => (0..SAMPLES).map(|i| (0.0635 * i as f64).sin()).collect(),
    };
    let cube: Vec<f64> = (0..SAMPLES).map(|i| (i as f64).powi(3)).collect();
    info!(samples = lower.len(), "lower series ready");

    let surface = SkiaSurface::new(args.width, args.height)?.with_backdrop(Color::WHITE);
    let mut graph = LineGraph::with_x_formatter(surface, clock_label);
    graph.set_config(&json!({
        "title": { "name": "Line Graph Testbench", "color": "darkgreen", "font": "large sans-serif" },
        "xAxis": { "values": ["12:30", "13:00", "13:30"], "textColor": "brown", "font": "medium sans-serif" },
        "yAxis": { "font": "medium sans-serif" }
    }));

    graph.draw_partial(
        &json!({
            "record": cube,
            "height": { "min": 0.6, "max": 1.0 },
            "color": { "stroke": "rgb(0, 0, 255)", "shadow": "rgba(0, 120, 255, 0.2)", "axis": "black" },
            "yAxis": { "lines": 5 }
        }),
        args.cursor,
    );
    graph.draw_partial(
        &json!({
            "record": lower,
            "height": { "min": 0.0, "max": 0.4 },
            "color": { "stroke": "rgb(150, 0, 150)", "shadow": "rgba(150, 0, 150, 0.2)", "axis": "gray" },
            "yAxis": { "lines": 3, "precision": 2 }
        }),
        None,
    );

    let mut surface = graph.into_surface();
    surface.write_png(&args.out)?;
    info!(path = %args.out.display(), "wrote testbench");
    println!("Wrote {}", args.out.display());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        csv: None,
        cursor: None,
        out: PathBuf::from("target/out/linegraph_testbench.png"),
        width: 1000,
        height: 500,
    };
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("missing value for {flag}"));
        match flag.as_str() {
            "--csv" => args.csv = Some(PathBuf::from(value()?)),
            "--out" => args.out = PathBuf::from(value()?),
            "--width" => args.width = value()?.parse().context("--width expects an integer")?,
            "--height" => args.height = value()?.parse().context("--height expects an integer")?,
            "--cursor" => {
                let raw = value()?;
                let (x, y) = raw.split_once(',').context("--cursor expects X,Y")?;
                args.cursor = Some(Point::new(
                    x.trim().parse().context("cursor X")?,
                    y.trim().parse().context("cursor Y")?,
                ));
            }
            other => anyhow::bail!("unknown argument {other}; usage: linegraph-demo [--csv FILE] [--cursor X,Y] [--out FILE] [--width W] [--height H]"),
        }
    }
    if args.width <= 0 || args.height <= 0 {
        anyhow::bail!("surface size must be positive, got {}x{}", args.width, args.height);
    }
    Ok(args)
}

/// Hover readout: the plot spans the hour from 12:30 to 13:30.
fn clock_label(fraction: f64) -> String {
    let start = NaiveTime::from_hms_opt(12, 30, 0).unwrap_or_default();
    let offset = TimeDelta::seconds((fraction.clamp(0.0, 1.0) * 3600.0).round() as i64);
    (start + offset).format("%H:%M").to_string()
}

/// First column whose first row parses as a number, read for every row that parses.
fn load_column(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.clone();

    let mut column = None;
    let mut values = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let idx = match column {
            Some(i) => i,
            None => {
                let Some(i) = record.iter().position(|f| f.trim().parse::<f64>().is_ok()) else {
                    continue;
                };
                info!(column = headers.get(i).unwrap_or("?"), "using CSV column");
                column = Some(i);
                i
            }
        };
        if let Some(v) = record.get(idx).and_then(|f| f.trim().parse::<f64>().ok()) {
            values.push(v);
        }
    }
    if values.is_empty() {
        anyhow::bail!("no numeric column in {}", path.display());
    }
    Ok(values)
}
