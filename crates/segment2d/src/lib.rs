//! Robust 2D line-segment geometry.
//!
//! Scope
//! - Closest-point projection onto a finite segment.
//! - Segment/segment intersection with explicit handling of parallel,
//!   collinear (overlapping or disjoint) and zero-length inputs.
//! - A canonicalized, order-independent intersection query
//!   (`Segment::intersects_at_precise`) for callers that need identical answers
//!   for `a × b` and `b × a`.
//!
//! Result vocabulary
//! - `None`: no intersection.
//! - `Some(p)` with finite `p`: the unique intersection point.
//! - `Some(p)` with both coordinates NaN: the segments overlap along a range.
//!   Use `is_overlap_sentinel` or the typed `Crossing` view to tell them apart.

pub mod line;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use line::{
    is_overlap_sentinel, overlap_sentinel, Crossing, GeomCfg, SeededHash, Segment, ZERO_EPS,
};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::line::{
        is_overlap_sentinel, overlap_sentinel, Crossing, GeomCfg, SeededHash, Segment,
    };
    pub use crate::sample::{draw_pair, PairCfg, PairKind, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}

/// 2D cross product `a.x * b.y - a.y * b.x`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross2(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
