//! Finite 2D line segments: projection and intersection.
//!
//! Purpose
//! - Provide a `Segment` value type with `closest_point`, a fast order-dependent
//!   `intersects_at`, and an order-independent `intersects_at_precise`.
//! - Keep degeneracy in the return value (`None` or the NaN overlap sentinel)
//!   instead of in error types; tolerances live in `GeomCfg`.
//!
//! Canonicalization
//! - The precise path orders endpoints and operands by a seeded content hash
//!   (`SeededHash`), so "which comes first" depends only on coordinate bits.
//!
//! Code cross-refs: `types::{Segment, GeomCfg, Crossing}`, `hash::SeededHash`,
//! `canon::{align, order_pair}`, `ops` (the `Segment` methods).

mod canon;
mod hash;
mod ops;
mod types;

pub use hash::SeededHash;
pub use types::{is_overlap_sentinel, overlap_sentinel, Crossing, GeomCfg, Segment, ZERO_EPS};

#[cfg(test)]
mod tests;
