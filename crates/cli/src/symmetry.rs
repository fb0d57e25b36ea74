//! Call-order symmetry audit over sampled segment pairs.
//!
//! For every pair `(a, b)` the precise path must return bitwise-identical
//! results for `a × b` and `b × a`; any difference is a hard failure. The fast
//! path is only counted: a mismatch there is a different classification, or
//! points further apart than `POINT_TOL`.

use anyhow::{Context, Result};
use segment2d::sample::{draw_pair, PairCfg, ReplayToken};
use segment2d::{Crossing, GeomCfg, Segment, Vec2};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::ensure_zero;
use crate::provenance::{write_sidecar, Payload};

const POINT_TOL: f64 = 1e-9;

#[derive(Debug, Default, Serialize)]
pub struct KindStats {
    pub pairs: u64,
    pub overlaps: u64,
    pub fast_mismatches: u64,
}

#[derive(Debug, Default, Serialize)]
pub struct SymmetryReport {
    pub pairs: u64,
    pub seed: u64,
    pub precise_mismatches: u64,
    pub fast_mismatches: u64,
    pub per_kind: BTreeMap<&'static str, KindStats>,
}

fn same_bits(a: Option<Vec2<f64>>, b: Option<Vec2<f64>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(p), Some(q)) => p.x.to_bits() == q.x.to_bits() && p.y.to_bits() == q.y.to_bits(),
        _ => false,
    }
}

fn fast_agrees(a: &Segment, b: &Segment, cfg: GeomCfg) -> bool {
    match (a.crossing(b, false, cfg), b.crossing(a, false, cfg)) {
        (None, None) | (Some(Crossing::Overlap), Some(Crossing::Overlap)) => true,
        (Some(Crossing::Point(p)), Some(Crossing::Point(q))) => (p - q).norm() <= POINT_TOL,
        _ => false,
    }
}

pub fn audit(count: u64, seed: u64, pairs: PairCfg, cfg: GeomCfg) -> SymmetryReport {
    let mut report = SymmetryReport {
        seed,
        ..SymmetryReport::default()
    };
    for index in 0..count {
        let tok = ReplayToken { seed, index };
        let (a, b, kind) = draw_pair(pairs, tok);
        let stats = report.per_kind.entry(kind.name()).or_default();
        stats.pairs += 1;
        report.pairs += 1;

        let ab = a.intersects_at_precise_cfg(&b, cfg);
        let ba = b.intersects_at_precise_cfg(&a, cfg);
        if !same_bits(ab, ba) {
            report.precise_mismatches += 1;
            tracing::warn!(index, kind = kind.name(), a = ?a.coords(), b = ?b.coords(), "precise path asymmetric");
        }
        if matches!(Crossing::from_raw(ab), Some(Crossing::Overlap)) {
            stats.overlaps += 1;
        }
        if !fast_agrees(&a, &b, cfg) {
            stats.fast_mismatches += 1;
            report.fast_mismatches += 1;
            tracing::debug!(index, kind = kind.name(), a = ?a.coords(), b = ?b.coords(), "fast path asymmetric");
        }
    }
    report
}

pub fn run(count: u64, seed: u64, pairs: PairCfg, cfg: GeomCfg, out: Option<&Path>) -> Result<()> {
    tracing::info!(count, seed, span = pairs.span, grid = ?pairs.grid, "symmetry");
    let report = audit(count, seed, pairs, cfg);
    tracing::info!(
        pairs = report.pairs,
        precise_mismatches = report.precise_mismatches,
        fast_mismatches = report.fast_mismatches,
        "symmetry_done"
    );
    let body = serde_json::to_vec_pretty(&report)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, &body).with_context(|| format!("writing {}", path.display()))?;
            write_sidecar(
                path,
                Payload::new(
                    "symmetry",
                    serde_json::json!({
                        "count": count,
                        "seed": seed,
                        "span": pairs.span,
                        "grid": pairs.grid,
                        "eps_zero": cfg.eps_zero,
                    }),
                ),
            )?;
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    ensure_zero("precise path asymmetry", report.precise_mismatches)
}
