use super::*;
use nalgebra::{vector, Vector2};

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment::from_coords(x0, y0, x1, y1)
}

/// Bitwise comparison of raw results (NaN sentinel compares equal to itself).
fn same_result(a: Option<Vector2<f64>>, b: Option<Vector2<f64>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(p), Some(q)) => p.x.to_bits() == q.x.to_bits() && p.y.to_bits() == q.y.to_bits(),
        _ => false,
    }
}

#[test]
fn closest_point_clamps_to_extent() {
    let s = seg(0.0, 0.0, 10.0, 0.0);
    assert_eq!(s.closest_point(vector![-5.0, 3.0]), vector![0.0, 0.0]);
    assert_eq!(s.closest_point(vector![15.0, -2.0]), vector![10.0, 0.0]);
    assert_eq!(s.closest_point(vector![4.0, 7.0]), vector![4.0, 0.0]);
}

#[test]
fn closest_point_on_zero_length_segment_is_begin() {
    let p = vector![2.0, -3.0];
    let s = Segment::new(p, p);
    for q in [vector![0.0, 0.0], vector![2.0, -3.0], vector![1e6, -7.5]] {
        assert_eq!(s.closest_point(q), p);
    }
}

#[test]
fn closest_point_diagonal_projection() {
    let s = seg(0.0, 0.0, 2.0, 2.0);
    let c = s.closest_point(vector![2.0, 0.0]);
    assert!((c - vector![1.0, 1.0]).norm() < 1e-12);
}

#[test]
fn clean_crossing() {
    let a = seg(0.0, 0.0, 4.0, 4.0);
    let b = seg(0.0, 4.0, 4.0, 0.0);
    assert_eq!(a.intersects_at(&b), Some(vector![2.0, 2.0]));
    assert_eq!(b.intersects_at(&a), Some(vector![2.0, 2.0]));
}

#[test]
fn endpoint_touch_counts_as_intersection() {
    let a = seg(0.0, 0.0, 1.0, 0.0);
    let b = seg(1.0, 0.0, 1.0, 1.0);
    assert_eq!(a.intersects_at(&b), Some(vector![1.0, 0.0]));
}

#[test]
fn lines_cross_outside_extent() {
    let a = seg(0.0, 0.0, 1.0, 0.0);
    let b = seg(2.0, -1.0, 2.0, 1.0);
    assert_eq!(a.intersects_at(&b), None);
    assert_eq!(b.intersects_at(&a), None);
}

#[test]
fn parallel_disjoint() {
    let a = seg(0.0, 0.0, 1.0, 0.0);
    let b = seg(0.0, 1.0, 1.0, 1.0);
    assert_eq!(a.intersects_at(&b), None);
}

#[test]
fn collinear_overlap_is_sentinel() {
    let a = seg(0.0, 0.0, 2.0, 0.0);
    let b = seg(1.0, 0.0, 3.0, 0.0);
    let hit = a.intersects_at(&b).expect("overlap");
    assert!(is_overlap_sentinel(&hit));
    assert!(is_overlap_sentinel(&b.intersects_at(&a).expect("overlap")));
}

#[test]
fn collinear_containment_is_sentinel() {
    let outer = seg(0.0, 0.0, 10.0, 0.0);
    let inner = seg(7.0, 0.0, 3.0, 0.0);
    assert!(is_overlap_sentinel(&outer.intersects_at(&inner).unwrap()));
    assert!(is_overlap_sentinel(&inner.intersects_at(&outer).unwrap()));
}

#[test]
fn collinear_overlap_facing_each_other() {
    let a = seg(0.0, 0.0, 2.0, 0.0);
    let b = seg(3.0, 0.0, 1.0, 0.0);
    assert!(is_overlap_sentinel(&a.intersects_at(&b).unwrap()));
    assert!(is_overlap_sentinel(&b.intersects_at(&a).unwrap()));
}

#[test]
fn collinear_endpoint_touch_is_reported_as_overlap() {
    let a = seg(0.0, 0.0, 1.0, 0.0);
    let b = seg(1.0, 0.0, 2.0, 0.0);
    assert!(is_overlap_sentinel(&a.intersects_at(&b).unwrap()));
}

#[test]
fn collinear_disjoint() {
    let a = seg(0.0, 0.0, 1.0, 0.0);
    let b = seg(2.0, 0.0, 3.0, 0.0);
    assert_eq!(a.intersects_at(&b), None);
    assert_eq!(b.intersects_at(&a), None);
}

#[test]
fn near_zero_tolerance_from_cfg() {
    // r × s = 2e-11 and qp × r = 1e-11: collinear under the default tolerance.
    let a = seg(0.0, 0.0, 1.0, 0.0);
    let b = seg(0.0, -1e-11, 1.0, 1e-11);
    assert!(is_overlap_sentinel(&a.intersects_at(&b).unwrap()));
    // With zero tolerance the segments cross at their midpoints.
    let tight = GeomCfg { eps_zero: 0.0 };
    assert_eq!(a.intersects_at_cfg(&b, tight), Some(vector![0.5, 0.0]));
    assert_eq!(
        a.crossing(&b, true, tight),
        Some(Crossing::Point(vector![0.5, 0.0]))
    );
}

#[test]
fn zero_length_on_interior_overlaps_both_ways() {
    let p = seg(1.0, 0.0, 1.0, 0.0);
    let s = seg(0.0, 0.0, 2.0, 0.0);
    assert!(is_overlap_sentinel(&p.intersects_at(&s).unwrap()));
    assert!(is_overlap_sentinel(&s.intersects_at(&p).unwrap()));
}

#[test]
fn zero_length_on_line_beyond_extent() {
    // The point lies on the carrier line but past the end. With s·s == 0 the
    // start-point range test for the other operand holds trivially, so both
    // call orders still report overlap.
    let p = seg(5.0, 0.0, 5.0, 0.0);
    let s = seg(0.0, 0.0, 2.0, 0.0);
    assert!(is_overlap_sentinel(&p.intersects_at(&s).unwrap()));
    assert!(is_overlap_sentinel(&s.intersects_at(&p).unwrap()));
    assert!(is_overlap_sentinel(&p.intersects_at_precise(&s).unwrap()));
    assert!(is_overlap_sentinel(&s.intersects_at_precise(&p).unwrap()));
}

#[test]
fn zero_length_off_line_is_order_dependent_in_fast_path() {
    // The fast path treats a zero-length receiver as collinear with anything.
    let p = seg(5.0, 5.0, 5.0, 5.0);
    let s = seg(0.0, 0.0, 2.0, 0.0);
    assert!(is_overlap_sentinel(&p.intersects_at(&s).unwrap()));
    assert_eq!(s.intersects_at(&p), None);
    // The precise path settles on one answer for both call orders.
    assert!(same_result(
        p.intersects_at_precise(&s),
        s.intersects_at_precise(&p)
    ));
}

#[test]
fn precise_matches_fast_on_clean_crossing() {
    let a = seg(0.0, 0.0, 4.0, 4.0);
    let b = seg(0.0, 4.0, 4.0, 0.0);
    assert_eq!(a.intersects_at_precise(&b), Some(vector![2.0, 2.0]));
    assert_eq!(b.intersects_at_precise(&a), Some(vector![2.0, 2.0]));
    assert_eq!(
        a.reversed().intersects_at_precise(&b.reversed()),
        Some(vector![2.0, 2.0])
    );
}

#[test]
fn precise_is_commutative_on_awkward_crossing() {
    let a = seg(0.1, 0.7, 3.3, -1.9);
    let b = seg(-0.4, -2.2, 2.9, 1.3);
    let ab = a.intersects_at_precise(&b);
    let ba = b.intersects_at_precise(&a);
    assert!(ab.is_some());
    assert!(same_result(ab, ba));
    assert!(same_result(ab, a.reversed().intersects_at_precise(&b)));
    assert!(same_result(ab, b.intersects_at_precise(&a.reversed())));
}

#[test]
fn precise_self_overlap() {
    for s in [
        seg(0.0, 0.0, 1.0, 1.0),
        seg(3.0, 3.0, 3.0, 3.0),
        seg(-1.0, 2.0, 5.0, 2.0),
    ] {
        assert!(is_overlap_sentinel(&s.intersects_at_precise(&s).unwrap()));
    }
}

#[test]
fn precise_segment_versus_its_reversal_overlaps() {
    let s = seg(0.0, 0.0, 1.0, 2.0);
    assert!(is_overlap_sentinel(
        &s.intersects_at_precise(&s.reversed()).unwrap()
    ));
}

#[test]
fn aligned_is_idempotent_and_orientation_free() {
    let s = seg(4.0, -1.0, -2.0, 6.0);
    let a = s.aligned();
    assert_eq!(a.aligned(), a);
    assert_eq!(s.reversed().aligned(), a);
    assert!(a == s || a == s.reversed());
}

#[test]
fn crossing_view() {
    let cfg = GeomCfg::default();
    let a = seg(0.0, 0.0, 2.0, 0.0);
    assert_eq!(
        a.crossing(&seg(1.0, -1.0, 1.0, 1.0), false, cfg),
        Some(Crossing::Point(vector![1.0, 0.0]))
    );
    assert_eq!(
        a.crossing(&seg(1.0, 0.0, 3.0, 0.0), true, cfg),
        Some(Crossing::Overlap)
    );
    assert_eq!(a.crossing(&seg(0.0, 1.0, 2.0, 1.0), true, cfg), None);
    assert!(is_overlap_sentinel(&Crossing::Overlap.into_raw()));
    assert_eq!(Crossing::Overlap.kind(), "overlap");
}

#[test]
fn segment_helpers() {
    let mut s = seg(1.0, 2.0, 4.0, 6.0);
    assert_eq!(s.vector(), vector![3.0, 4.0]);
    assert!((s.length() - 5.0).abs() < 1e-12);
    assert!(!s.is_degenerate());
    s.reverse();
    assert_eq!(s, seg(4.0, 6.0, 1.0, 2.0));
    assert!(seg(1.0, 1.0, 1.0, 1.0).is_degenerate());
}
