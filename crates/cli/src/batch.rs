//! CSV batch mode: one segment pair per row in, one crossing per row out.
//!
//! Input columns: `ax0,ay0,ax1,ay1,bx0,by0,bx1,by1` (extra columns ignored).
//! Output columns: `kind,x,y` where `kind ∈ {none, point, overlap}` and `x,y`
//! are null unless `kind == point`. Output format follows the extension
//! (`.parquet`, anything else is CSV).

use anyhow::{Context, Result};
use polars::prelude::*;
use segment2d::{GeomCfg, Segment};
use std::fs::File;
use std::path::Path;

use crate::provenance::{write_sidecar, Payload};
use crate::CrossingOut;

pub const COLUMNS: [&str; 8] = ["ax0", "ay0", "ax1", "ay1", "bx0", "by0", "bx1", "by1"];

/// Counts per result kind.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub points: usize,
    pub overlaps: usize,
    pub misses: usize,
}

pub fn run(input: &Path, out: &Path, precise: bool, cfg: GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), precise, "batch");
    let pairs = read_pairs(input)?;
    let rows: Vec<CrossingOut> = pairs
        .iter()
        .map(|(a, b)| CrossingOut::new(a.crossing(b, precise, cfg)))
        .collect();
    let summary = write_results(out, &rows)?;
    tracing::info!(
        rows = summary.rows,
        points = summary.points,
        overlaps = summary.overlaps,
        misses = summary.misses,
        "batch_done"
    );
    write_sidecar(
        out,
        Payload::new(
            "batch",
            serde_json::json!({
                "input": input.to_string_lossy(),
                "precise": precise,
                "eps_zero": cfg.eps_zero,
                "rows": summary.rows,
            }),
        ),
    )?;
    Ok(())
}

pub fn read_pairs(input: &Path) -> Result<Vec<(Segment, Segment)>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let mut cols = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let col = df
            .column(name)
            .with_context(|| format!("missing column {name}"))?
            .cast(&DataType::Float64)
            .with_context(|| format!("column {name} is not numeric"))?;
        cols.push(col);
    }

    let mut pairs = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut v = [0.0f64; 8];
        for (k, col) in cols.iter().enumerate() {
            v[k] = col
                .f64()?
                .get(row)
                .with_context(|| format!("row {row}: null in column {}", COLUMNS[k]))?;
        }
        pairs.push((
            Segment::from_coords(v[0], v[1], v[2], v[3]),
            Segment::from_coords(v[4], v[5], v[6], v[7]),
        ));
    }
    Ok(pairs)
}

pub fn write_results(out: &Path, rows: &[CrossingOut]) -> Result<Summary> {
    let mut summary = Summary {
        rows: rows.len(),
        ..Summary::default()
    };
    for r in rows {
        match r.kind {
            "point" => summary.points += 1,
            "overlap" => summary.overlaps += 1,
            _ => summary.misses += 1,
        }
    }

    let kinds: Vec<&str> = rows.iter().map(|r| r.kind).collect();
    let xs: Vec<Option<f64>> = rows.iter().map(|r| r.x).collect();
    let ys: Vec<Option<f64>> = rows.iter().map(|r| r.y).collect();
    let mut df = df!(
        "kind" => kinds,
        "x" => xs,
        "y" => ys,
    )?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(&mut df)?;
        }
        _ => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)?;
        }
    }
    Ok(summary)
}
