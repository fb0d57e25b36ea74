//! Seeded content hash over coordinate bit patterns.
//!
//! The hash is order-sensitive (`(a, b)` and `(b, a)` hash differently) and
//! keyed by a `u64` seed so that ties under one seed can be re-drawn under the
//! next. Backed by BLAKE3; the first 8 bytes of the digest are read as
//! little-endian `u64`.

use blake3::Hasher;
use nalgebra::Vector2;

use super::types::Segment;

/// Values that can be hashed with an integer seed for canonical ordering.
pub trait SeededHash {
    /// Hash of the value's coordinate bits under `seed`.
    fn seeded_hash(&self, seed: u64) -> u64;

    /// True if both values have identical coordinate bit patterns.
    /// Such values hash identically under every seed.
    fn same_bits(&self, other: &Self) -> bool;
}

fn hash_words(words: &[u64], seed: u64) -> u64 {
    let mut h = Hasher::new();
    h.update(&seed.to_le_bytes());
    for w in words {
        h.update(&w.to_le_bytes());
    }
    let digest = h.finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(head)
}

#[inline]
fn point_words(p: &Vector2<f64>) -> [u64; 2] {
    [p.x.to_bits(), p.y.to_bits()]
}

impl SeededHash for Vector2<f64> {
    fn seeded_hash(&self, seed: u64) -> u64 {
        hash_words(&point_words(self), seed)
    }

    fn same_bits(&self, other: &Self) -> bool {
        point_words(self) == point_words(other)
    }
}

impl SeededHash for Segment {
    fn seeded_hash(&self, seed: u64) -> u64 {
        hash_words(&self.coords().map(f64::to_bits), seed)
    }

    fn same_bits(&self, other: &Self) -> bool {
        self.coords().map(f64::to_bits) == other.coords().map(f64::to_bits)
    }
}
