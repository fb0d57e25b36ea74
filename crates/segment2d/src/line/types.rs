//! Basic segment types and tolerances.
//!
//! - `GeomCfg`: centralizes the near-zero tolerance used by the intersection test.
//! - `Segment`: ordered endpoint pair `(begin, end)`; zero length is allowed.
//! - `Crossing`: typed view over the `Option<Vector2>` result vocabulary.

use nalgebra::Vector2;

/// Absolute tolerance under which cross products are treated as zero.
pub const ZERO_EPS: f64 = 1e-10;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_zero: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_zero: ZERO_EPS }
    }
}

impl GeomCfg {
    /// Near-zero predicate `|x| < eps_zero`.
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() < self.eps_zero
    }
}

/// Finite line segment from `begin` to `end`.
///
/// No validation on construction: `begin == end` is a valid, zero-length
/// segment that behaves like a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub begin: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(begin: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { begin, end }
    }

    #[inline]
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Vector2::new(x0, y0), Vector2::new(x1, y1))
    }

    /// Direction vector `end - begin` (not normalized).
    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        self.end - self.begin
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Exact check, no tolerance.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.begin == self.end
    }

    /// Swap `begin` and `end` in place.
    #[inline]
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.begin, &mut self.end);
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.begin)
    }

    /// Coordinates in `(begin.x, begin.y, end.x, end.y)` order.
    #[inline]
    pub fn coords(&self) -> [f64; 4] {
        [self.begin.x, self.begin.y, self.end.x, self.end.y]
    }
}

/// The reserved "overlap" result: both coordinates are quiet NaN.
#[inline]
pub fn overlap_sentinel() -> Vector2<f64> {
    Vector2::new(f64::NAN, f64::NAN)
}

/// True if `p` is the overlap sentinel rather than a real point.
#[inline]
pub fn is_overlap_sentinel(p: &Vector2<f64>) -> bool {
    p.x.is_nan() && p.y.is_nan()
}

/// Typed view of an intersection result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crossing {
    /// Unique intersection point.
    Point(Vector2<f64>),
    /// Collinear overlap (or identical segments); no single point.
    Overlap,
}

impl Crossing {
    /// Interpret the raw `Option<Vector2>` vocabulary.
    #[inline]
    pub fn from_raw(raw: Option<Vector2<f64>>) -> Option<Self> {
        raw.map(|p| {
            if is_overlap_sentinel(&p) {
                Crossing::Overlap
            } else {
                Crossing::Point(p)
            }
        })
    }

    /// Back to the raw vocabulary (overlap becomes the NaN sentinel).
    #[inline]
    pub fn into_raw(self) -> Vector2<f64> {
        match self {
            Crossing::Point(p) => p,
            Crossing::Overlap => overlap_sentinel(),
        }
    }

    /// Short label used by the CLI and bindings.
    pub fn kind(&self) -> &'static str {
        match self {
            Crossing::Point(_) => "point",
            Crossing::Overlap => "overlap",
        }
    }
}
