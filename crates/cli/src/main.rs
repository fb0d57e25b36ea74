use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use segment2d::sample::PairCfg;
use segment2d::{Crossing, GeomCfg, Segment, Vec2};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;
mod symmetry;

#[derive(Parser)]
#[command(name = "seg2d")]
#[command(about = "Segment projection and intersection queries")]
struct Cmd {
    /// Near-zero tolerance for cross products
    #[arg(long, global = true, default_value_t = segment2d::ZERO_EPS)]
    eps: f64,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Closest point of a segment to a query point
    Closest {
        /// Segment as x0,y0,x1,y1
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        segment: Segment,
        /// Query point as x,y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Vec2<f64>,
    },
    /// Intersect two segments
    Intersect {
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        a: Segment,
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        b: Segment,
        /// Use the order-independent (canonicalized) path
        #[arg(long)]
        precise: bool,
    },
    /// Intersect every row of a CSV of segment pairs; writes CSV or Parquet
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        precise: bool,
    },
    /// Check call-order symmetry on sampled degenerate-heavy pairs
    Symmetry {
        #[arg(long, default_value_t = 10_000)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Coordinate span of the sampler
        #[arg(long, default_value_t = 10.0)]
        span: f64,
        /// Grid step for snapped coordinates; 0 disables snapping
        #[arg(long, default_value_t = 0.5)]
        grid: f64,
        /// Optional JSON report path (with provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    let cfg = geom_cfg(cmd.eps)?;
    match cmd.action {
        Action::Closest { segment, point } => closest(segment, point),
        Action::Intersect { a, b, precise } => intersect(a, b, precise, cfg),
        Action::Batch {
            input,
            out,
            precise,
        } => batch::run(&input, &out, precise, cfg),
        Action::Symmetry {
            count,
            seed,
            span,
            grid,
            out,
        } => symmetry::run(count, seed, pair_cfg(span, grid)?, cfg, out.as_deref()),
        Action::Report => report(),
    }
}

/// JSON shape of one intersection result.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct CrossingOut {
    pub kind: &'static str,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl CrossingOut {
    pub(crate) fn new(c: Option<Crossing>) -> Self {
        match c {
            None => Self {
                kind: "none",
                x: None,
                y: None,
            },
            Some(Crossing::Overlap) => Self {
                kind: "overlap",
                x: None,
                y: None,
            },
            Some(Crossing::Point(p)) => Self {
                kind: "point",
                x: Some(p.x),
                y: Some(p.y),
            },
        }
    }
}

fn closest(segment: Segment, point: Vec2<f64>) -> Result<()> {
    let c = segment.closest_point(point);
    tracing::debug!(segment = ?segment.coords(), x = point.x, y = point.y, "closest");
    let obj = serde_json::json!({ "x": c.x, "y": c.y });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn intersect(a: Segment, b: Segment, precise: bool, cfg: GeomCfg) -> Result<()> {
    let out = CrossingOut::new(a.crossing(&b, precise, cfg));
    tracing::debug!(precise, kind = out.kind, "intersect");
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": segment2d::VERSION,
        "params": { "eps_zero": segment2d::ZERO_EPS },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn parse_coords<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got {}", parts.len()));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid number {part:?}: {e}"))?;
    }
    Ok(out)
}

fn parse_segment(s: &str) -> Result<Segment, String> {
    let [x0, y0, x1, y1] = parse_coords::<4>(s)?;
    Ok(Segment::from_coords(x0, y0, x1, y1))
}

fn parse_point(s: &str) -> Result<Vec2<f64>, String> {
    let [x, y] = parse_coords::<2>(s)?;
    Ok(Vec2::new(x, y))
}

/// Tolerance from `--eps`; must be finite and non-negative.
fn geom_cfg(eps: f64) -> Result<GeomCfg> {
    if !(eps.is_finite() && eps >= 0.0) {
        bail!("--eps must be finite and non-negative, got {eps}");
    }
    Ok(GeomCfg { eps_zero: eps })
}

/// Sampler settings from `--span`/`--grid`; `grid == 0` disables snapping.
fn pair_cfg(span: f64, grid: f64) -> Result<PairCfg> {
    if !(span.is_finite() && span > 0.0 && (2.0 * span).is_finite()) {
        bail!("--span must be positive with a finite width 2*span, got {span}");
    }
    if !(grid.is_finite() && grid >= 0.0) {
        bail!("--grid must be finite and non-negative, got {grid}");
    }
    Ok(PairCfg {
        span,
        grid: (grid > 0.0).then_some(grid),
        kind: None,
    })
}

/// Fails the command when a check reports any violation.
pub(crate) fn ensure_zero(what: &str, count: u64) -> Result<()> {
    if count > 0 {
        bail!("{what}: {count} violation(s)");
    }
    Ok(())
}
