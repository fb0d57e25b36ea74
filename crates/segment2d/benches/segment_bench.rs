//! Criterion benchmarks for segment intersection.
//! Compares the fast path with the canonicalized precise path per pair family.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use segment2d::sample::{draw_pair, PairCfg, PairKind, ReplayToken};
use segment2d::{Segment, Vec2};

fn pairs(kind: PairKind, n: u64, seed: u64) -> Vec<(Segment, Segment)> {
    let cfg = PairCfg {
        kind: Some(kind),
        ..PairCfg::default()
    };
    (0..n)
        .map(|index| {
            let (a, b, _) = draw_pair(cfg, ReplayToken { seed, index });
            (a, b)
        })
        .collect()
}

fn bench_intersection(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection");
    for kind in PairKind::ALL {
        let input = pairs(kind, 256, 43);
        group.bench_with_input(BenchmarkId::new("fast", kind.name()), &input, |b, input| {
            b.iter(|| {
                for (s, t) in input {
                    black_box(s.intersects_at(t));
                }
            })
        });
        group.bench_with_input(
            BenchmarkId::new("precise", kind.name()),
            &input,
            |b, input| {
                b.iter(|| {
                    for (s, t) in input {
                        black_box(s.intersects_at_precise(t));
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_closest(c: &mut Criterion) {
    let input = pairs(PairKind::Generic, 256, 44);
    c.bench_function("closest_point", |b| {
        b.iter(|| {
            for (s, t) in &input {
                black_box(s.closest_point(t.begin));
                black_box(s.closest_point(Vec2::new(t.end.x, t.begin.y)));
            }
        })
    });
}

criterion_group!(benches, bench_intersection, bench_closest);
criterion_main!(benches);
