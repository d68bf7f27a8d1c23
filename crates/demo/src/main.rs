// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y,z,value CSV and prints the derived axes, grid size, distinct points and colors.

use anyhow::{Context, Result};
use axis_core::theme;
use axis_core::{ColorProvider, DataPoint, DataSet, HueColorProvider, NumericKind, NumericValue, TickGenerationConfig, ViewState};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "axis-demo")]
#[command(about = "Derive axis ticks, grid and colors for a 3D point cloud CSV")]
struct Args {
    /// CSV file with x, y, z and value columns
    input: PathBuf,

    /// Numeric kind of every column: int8, int16, int32, int64, float32, float64
    #[arg(short, long, default_value = "float64")]
    kind: String,

    /// Fractional digits used to compare decimal samples
    #[arg(short, long)]
    precision: Option<u32>,

    /// Interior ticks per axis
    #[arg(short, long, default_value = "4")]
    ticks: usize,

    /// Place interior ticks logarithmically
    #[arg(long)]
    log: bool,

    /// Color scheme: rainbow, heat, cool, grayscale
    #[arg(short, long, default_value = "rainbow")]
    scheme: String,

    /// Number of samples whose color is printed
    #[arg(long, default_value = "5")]
    colors: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,axis_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let kind: NumericKind = args.kind.parse().context("invalid --kind")?;

    let data = load_points_csv(&args.input, kind, args.precision)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    tracing::info!(points = data.len(), %kind, "loaded data set");

    if data.is_empty() {
        anyhow::bail!("no points loaded; check headers/delimiter.");
    }

    let view = ViewState::from_dataset(&data)?;
    let config = TickGenerationConfig::labelled(args.ticks).with_log_scale(args.log);

    for axis in view.axes(&config) {
        println!("Axis {} [{}, {}] ({}), tick length {}", axis.label, axis.min(), axis.max(), axis.kind(), axis.tick_length());
        for tick in axis.ticks() {
            match &tick.label {
                Some(label) => println!("  {:>14}  {}", tick.value, label),
                None => println!("  {:>14}", tick.value),
            }
        }
    }

    let grid = view.grid(&config);
    println!("Grid segments: {}", grid.len());
    println!("Distinct points: {} of {}", data.distinct_points().len(), data.len());

    let provider = HueColorProvider::new(view.color_scale()).with_scheme(theme::find(&args.scheme));
    println!("Colors ({} scheme):", provider.scheme().name);
    for p in data.points().iter().take(args.colors) {
        let c = provider.color_of(&p.value);
        println!("  {:>14} -> #{:02x}{:02x}{:02x}", p.value, c.r, c.g, c.b);
    }

    Ok(())
}

/// Load rows into a data set, parsing every column as `kind`.
fn load_points_csv(path: &Path, kind: NumericKind, precision: Option<u32>) -> Result<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str], fallback: usize| -> usize {
        headers.iter().position(|h| names.contains(&h.as_str())).unwrap_or(fallback)
    };
    let columns = [
        idx(&["x"], 0),
        idx(&["y"], 1),
        idx(&["z"], 2),
        idx(&["value", "v", "w", "sample"], 3),
    ];

    let mut data = DataSet::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| -> Result<NumericValue> {
            let text = rec.get(i).with_context(|| format!("row {row}: missing column {i}"))?;
            Ok(kind.parse_value(text)?.with_precision(precision))
        };
        let point = DataPoint::new(parse(columns[0])?, parse(columns[1])?, parse(columns[2])?, parse(columns[3])?);
        data.try_push(point).with_context(|| format!("row {row}"))?;
    }
    Ok(data)
}
