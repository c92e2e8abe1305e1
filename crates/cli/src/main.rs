use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use nball::estimate::{sweep, DimensionVolume};

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Sweep runner for Monte Carlo n-ball volume estimates")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Estimate ball volumes for dimensions 0..max-dim and print the series
    Sweep {
        /// Sweep upper bound, exclusive
        #[arg(long, default_value_t = 10)]
        max_dim: usize,
        /// Samples drawn per dimension (estimator accuracy)
        #[arg(long, default_value_t = 100_000)]
        samples: usize,
        /// Seed for the per-dimension replay streams
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Optional artifact path; `.parquet` writes parquet, anything else CSV
        #[arg(long)]
        out: Option<String>,
    },
    /// Re-emit a written series as scatter-plot JSON (x = dimension, y = volume)
    Figure {
        #[arg(long)]
        from: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sweep {
            max_dim,
            samples,
            seed,
            out,
        } => run_sweep(max_dim, samples, seed, out),
        Action::Figure { from, out } => figure(from, out),
        Action::Report => report(),
    }
}

fn run_sweep(max_dim: usize, samples: usize, seed: u64, out: Option<String>) -> Result<()> {
    tracing::info!(max_dim, samples, seed, out = ?out, "sweep");
    let series = sweep(max_dim, samples, seed)?;
    for entry in &series {
        println!("The {}-ball has volume {}", entry.dimension, entry.volume);
    }

    if let Some(out) = out {
        write_series(&series, Path::new(&out))?;
        provenance::write_sidecar(
            &out,
            provenance::Payload::new(serde_json::json!({
                "max_dim": max_dim,
                "samples": samples,
                "seed": seed,
            })),
        )?;
        tracing::info!(out, rows = series.len(), "series_written");
    }
    Ok(())
}

/// Build the two-column frame consumed by `figure` and external plotters.
fn series_frame(series: &[DimensionVolume]) -> Result<DataFrame> {
    let dimensions: Vec<i64> = series.iter().map(|e| e.dimension as i64).collect();
    let volumes: Vec<f64> = series.iter().map(|e| e.volume).collect();
    Ok(df!("dimension" => dimensions, "volume" => volumes)?)
}

fn write_series(series: &[DimensionVolume], path: &Path) -> Result<()> {
    let mut frame = series_frame(series)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file =
        std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(&mut frame)?;
        }
        _ => {
            CsvWriter::new(file).finish(&mut frame)?;
        }
    }
    Ok(())
}

fn figure(from: String, out: String) -> Result<()> {
    tracing::info!(from, out, "figure");
    let points = scatter_points(&from)?;
    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&out, serde_json::to_vec_pretty(&points)?)
        .with_context(|| format!("writing {out}"))?;
    provenance::write_sidecar(
        &out,
        provenance::Payload::new(serde_json::json!({ "from": from })),
    )?;
    Ok(())
}

/// Read a series artifact back (CSV, lazily) and shape it as scatter data.
fn scatter_points(from: &str) -> Result<Vec<serde_json::Value>> {
    let lf = LazyCsvReader::new(from)
        .with_infer_schema_length(Some(100))
        .finish()?;
    let df = lf.collect()?;
    let dimensions = df.column("dimension")?.i64()?;
    let volumes = df.column("volume")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (d, v) in dimensions.into_iter().zip(volumes.into_iter()) {
        points.push(serde_json::json!({ "x": d, "y": v }));
    }
    Ok(points)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn series_frame_has_one_row_per_dimension() {
        let series = sweep(5, 100, 7).unwrap();
        let frame = series_frame(&series).unwrap();
        assert_eq!(frame.shape(), (5, 2));
    }

    #[test]
    fn csv_round_trip_preserves_the_series() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("series.csv");
        let series = sweep(4, 500, 11).unwrap();
        write_series(&series, &path).unwrap();

        let points = scatter_points(path.to_str().unwrap()).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0]["x"], 0);
        assert_eq!(points[0]["y"], 1.0);
        assert_eq!(points[1]["y"], 2.0);
    }
}
