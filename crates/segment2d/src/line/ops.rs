//! Projection and intersection on `Segment`.
//!
//! `intersects_at` uses the parametric cross-product formulation
//! `p + t r = q + u s` with `r = end - begin`, `s = other.end - other.begin`.
//! The results are encoded as `None` (no intersection), a finite point, or the
//! NaN overlap sentinel.

use nalgebra::Vector2;

use super::canon::{align, order_pair};
use super::types::{overlap_sentinel, Crossing, GeomCfg, Segment};
use crate::cross2;

impl Segment {
    /// Point of the segment closest to `p` (projection clamped to the extent).
    pub fn closest_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        let v = self.vector();
        let d = v.norm();
        if d == 0.0 {
            return self.begin;
        }
        let v = v / d;
        let t = v.dot(&(p - self.begin));
        if t < 0.0 {
            return self.begin;
        }
        if t > d {
            return self.end;
        }
        self.begin + v * t
    }

    /// Intersection with `other` under the default tolerance.
    ///
    /// Order-dependent in degenerate cases; see `intersects_at_precise`.
    pub fn intersects_at(&self, other: &Segment) -> Option<Vector2<f64>> {
        self.intersects_at_cfg(other, GeomCfg::default())
    }

    /// Intersection with `other` using the near-zero predicate from `cfg`.
    ///
    /// Decision order
    /// - `r × s ≈ 0` and `qp × r ≈ 0`: collinear. Overlap sentinel if the
    ///   projected ranges intersect (an endpoint of one segment projects into
    ///   the other's range), else `None`.
    /// - `r × s ≈ 0` only: parallel, `None`.
    /// - Otherwise: unique line crossing, kept iff `t, u ∈ [0, 1]`.
    pub fn intersects_at_cfg(&self, other: &Segment, cfg: GeomCfg) -> Option<Vector2<f64>> {
        let r = self.end - self.begin;
        let s = other.end - other.begin;
        let qp = other.begin - self.begin;
        let rxs = cross2(r, s);
        let qpxr = cross2(qp, r);
        let qpxs = cross2(qp, s);
        let rxs_zero = cfg.is_zero(rxs);

        if rxs_zero {
            if !cfg.is_zero(qpxr) {
                return None;
            }
            let rr = r.dot(&r);
            let qpr = qp.dot(&r);
            let pqs = (self.begin - other.begin).dot(&s);
            // other.begin in self, or self.begin in other; the third test
            // catches overlaps where the two segments face each other.
            let q1r = (other.end - self.begin).dot(&r);
            let overlaps = (0.0 <= qpr && qpr <= rr)
                || (0.0 <= pqs && pqs <= s.dot(&s))
                || (0.0 <= q1r && q1r <= rr);
            return overlaps.then(overlap_sentinel);
        }

        let t = qpxs / rxs;
        let u = qpxr / rxs;
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(self.begin + r * t)
        } else {
            None
        }
    }

    /// Order-independent intersection under the default tolerance.
    ///
    /// `a.intersects_at_precise(&b)` and `b.intersects_at_precise(&a)` return
    /// bitwise-identical results.
    pub fn intersects_at_precise(&self, other: &Segment) -> Option<Vector2<f64>> {
        self.intersects_at_precise_cfg(other, GeomCfg::default())
    }

    /// Canonicalize endpoint order of both operands, then operand order, and
    /// delegate to `intersects_at_cfg(first, second)`.
    ///
    /// Equal segments (and a segment versus its own reversal) yield the overlap
    /// sentinel.
    pub fn intersects_at_precise_cfg(
        &self,
        other: &Segment,
        cfg: GeomCfg,
    ) -> Option<Vector2<f64>> {
        if self == other {
            return Some(overlap_sentinel());
        }
        let a = align(*self);
        let b = align(*other);
        match order_pair(a, b) {
            Some((first, second)) => first.intersects_at_cfg(&second, cfg),
            None => Some(overlap_sentinel()),
        }
    }

    /// Endpoint-canonical copy: the same geometric segment with a `begin`/`end`
    /// order that depends only on the coordinate values. Idempotent.
    pub fn aligned(&self) -> Segment {
        align(*self)
    }

    /// Typed intersection result through the fast or the precise path.
    pub fn crossing(&self, other: &Segment, precise: bool, cfg: GeomCfg) -> Option<Crossing> {
        let raw = if precise {
            self.intersects_at_precise_cfg(other, cfg)
        } else {
            self.intersects_at_cfg(other, cfg)
        };
        Crossing::from_raw(raw)
    }
}
