//! Random segment pairs biased towards degenerate configurations.
//!
//! Purpose
//! - Provide a small, deterministic sampler for stress-testing the intersection
//!   paths: generic pairs plus collinear, parallel, zero-length,
//!   shared-endpoint and reversed-duplicate pairs.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so any single draw can be reproduced from its token.
//!
//! Code cross-refs: `line::Segment`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::line::Segment;

/// Configuration family of a drawn pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairKind {
    Generic,
    Collinear,
    Parallel,
    ZeroLength,
    SharedEndpoint,
    ReversedDuplicate,
}

impl PairKind {
    pub const ALL: [PairKind; 6] = [
        PairKind::Generic,
        PairKind::Collinear,
        PairKind::Parallel,
        PairKind::ZeroLength,
        PairKind::SharedEndpoint,
        PairKind::ReversedDuplicate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PairKind::Generic => "generic",
            PairKind::Collinear => "collinear",
            PairKind::Parallel => "parallel",
            PairKind::ZeroLength => "zero_length",
            PairKind::SharedEndpoint => "shared_endpoint",
            PairKind::ReversedDuplicate => "reversed_duplicate",
        }
    }
}

/// Largest usable `PairCfg::span`; larger (or non-finite) spans are clamped.
pub const MAX_SPAN: f64 = f64::MAX / 2.0;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PairCfg {
    /// Coordinates are drawn from `[-span, span]`, with `span` clamped to `MAX_SPAN`.
    pub span: f64,
    /// Snap coordinates to multiples of this step (exact degeneracies). `None` keeps raw floats.
    pub grid: Option<f64>,
    /// Force a family; `None` draws one uniformly per pair.
    pub kind: Option<PairKind>,
}

impl Default for PairCfg {
    fn default() -> Self {
        Self {
            span: 10.0,
            grid: Some(0.5),
            kind: None,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

struct Sampler {
    rng: StdRng,
    span: f64,
    grid: Option<f64>,
}

impl Sampler {
    fn coord(&mut self) -> f64 {
        // `[-span, span]` needs a finite width; NaN falls back to the minimum.
        let span = self.span.abs().max(1e-9).min(MAX_SPAN);
        let v = self.rng.gen_range(-span..=span);
        match self.grid {
            Some(step) if step > 0.0 && step.is_finite() => (v / step).round() * step,
            _ => v,
        }
    }

    fn point(&mut self) -> Vector2<f64> {
        Vector2::new(self.coord(), self.coord())
    }

    /// Non-zero direction (falls back to the x-axis).
    fn direction(&mut self) -> Vector2<f64> {
        let d = self.point();
        if d.x == 0.0 && d.y == 0.0 {
            Vector2::new(1.0, 0.0)
        } else {
            d
        }
    }

    /// Small integer parameter in `[-3, 3]`, exact under multiplication.
    fn step(&mut self) -> f64 {
        self.rng.gen_range(-3i32..=3) as f64
    }

    fn maybe_reverse(&mut self, s: Segment) -> Segment {
        if self.rng.gen::<bool>() {
            s.reversed()
        } else {
            s
        }
    }
}

/// Draw one segment pair; returns the pair and the family it came from.
pub fn draw_pair(cfg: PairCfg, tok: ReplayToken) -> (Segment, Segment, PairKind) {
    let mut s = Sampler {
        rng: tok.to_std_rng(),
        span: cfg.span,
        grid: cfg.grid,
    };
    let kind = cfg
        .kind
        .unwrap_or_else(|| PairKind::ALL[s.rng.gen_range(0..PairKind::ALL.len())]);
    let (a, b) = match kind {
        PairKind::Generic => (
            Segment::new(s.point(), s.point()),
            Segment::new(s.point(), s.point()),
        ),
        PairKind::Collinear => {
            let p = s.point();
            let d = s.direction();
            let (t0, t1, t2, t3) = (s.step(), s.step(), s.step(), s.step());
            (
                Segment::new(p + d * t0, p + d * t1),
                Segment::new(p + d * t2, p + d * t3),
            )
        }
        PairKind::Parallel => {
            let p = s.point();
            let d = s.direction();
            let n = Vector2::new(-d.y, d.x);
            let k = s.step();
            let k = if k == 0.0 { 1.0 } else { k };
            let q = p + n * k;
            let (t0, t1) = (s.step(), s.step());
            (
                Segment::new(p, p + d),
                Segment::new(q + d * t0, q + d * t1),
            )
        }
        PairKind::ZeroLength => {
            let p = s.point();
            let other = Segment::new(s.point(), s.point());
            (Segment::new(p, p), other)
        }
        PairKind::SharedEndpoint => {
            let (p, q, r) = (s.point(), s.point(), s.point());
            let a = s.maybe_reverse(Segment::new(p, q));
            let b = s.maybe_reverse(Segment::new(q, r));
            (a, b)
        }
        PairKind::ReversedDuplicate => {
            let a = Segment::new(s.point(), s.point());
            (a, a.reversed())
        }
    };
    if s.rng.gen::<bool>() {
        (b, a, kind)
    } else {
        (a, b, kind)
    }
}
