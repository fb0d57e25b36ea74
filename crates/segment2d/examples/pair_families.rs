//! Print a few sampled pairs per family with fast vs precise classification.
//!
//! Usage:
//!   cargo run -p segment2d --example pair_families -- [count]

use segment2d::sample::{draw_pair, PairCfg, PairKind, ReplayToken};
use segment2d::{Crossing, GeomCfg, Segment};

fn describe(c: Option<Crossing>) -> String {
    match c {
        None => "none".to_string(),
        Some(Crossing::Overlap) => "overlap".to_string(),
        Some(Crossing::Point(p)) => format!("point({:.3}, {:.3})", p.x, p.y),
    }
}

fn show(a: &Segment, b: &Segment) {
    let cfg = GeomCfg::default();
    println!(
        "  a={:?} b={:?}\n    fast a×b={} b×a={} | precise={}",
        a.coords(),
        b.coords(),
        describe(a.crossing(b, false, cfg)),
        describe(b.crossing(a, false, cfg)),
        describe(a.crossing(b, true, cfg)),
    );
}

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(3);
    for kind in PairKind::ALL {
        println!("{}:", kind.name());
        let cfg = PairCfg {
            kind: Some(kind),
            ..PairCfg::default()
        };
        for index in 0..count {
            let (a, b, _) = draw_pair(cfg, ReplayToken { seed: 2025, index });
            show(&a, &b);
        }
    }
}
