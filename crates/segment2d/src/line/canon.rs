//! Hash-driven canonical ordering of endpoints and operands.
//!
//! - `hash_order`: total order on values with distinct coordinate bits; seeds
//!   0, 1, 2, … are tried until the two hashes differ.
//! - `align`: endpoint canonicalization of a segment (smaller hash first).
//! - `order_pair`: operand canonicalization of two aligned segments.
//!
//! The seed loop carries no iteration cap. Values with identical bits are
//! reported as `Equal` up front since no seed can separate them.

use std::cmp::Ordering;

use super::hash::SeededHash;
use super::types::Segment;

pub(crate) fn hash_order<T: SeededHash>(a: &T, b: &T) -> Ordering {
    if a.same_bits(b) {
        return Ordering::Equal;
    }
    let mut seed = 0u64;
    loop {
        match a.seeded_hash(seed).cmp(&b.seeded_hash(seed)) {
            Ordering::Equal => {
                tracing::trace!(seed, "seeded hash tie, retrying with next seed");
                seed = seed.wrapping_add(1);
            }
            o => return o,
        }
    }
}

/// Endpoint canonicalization: the endpoint with the smaller hash becomes `begin`.
/// Zero-length segments are returned unchanged.
pub(crate) fn align(mut seg: Segment) -> Segment {
    if seg.begin == seg.end {
        return seg;
    }
    if hash_order(&seg.begin, &seg.end) == Ordering::Greater {
        seg.reverse();
    }
    seg
}

/// Operand canonicalization: returns `(first, second)`, or `None` if the two
/// segments cannot be told apart (identical coordinate bits).
pub(crate) fn order_pair(a: Segment, b: Segment) -> Option<(Segment, Segment)> {
    match hash_order(&a, &b) {
        Ordering::Less => Some((a, b)),
        Ordering::Greater => Some((b, a)),
        Ordering::Equal => None,
    }
}
